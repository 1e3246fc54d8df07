//! Device operations

use crate::proxy::ServerSession;
use crate::Result;
use printadm_core::xmlrpc::Value;

impl ServerSession {
    /// Push any outstanding configuration changes (made through the
    /// property setters) out to the device.
    pub fn apply_device_settings(&mut self, token: &str, device_name: &str) -> Result<Value> {
        self.invoke("applyDeviceSettings", vec![token.into(), device_name.into()])
    }

    /// Set the SNMPv3 configuration for a device. Parameters are ordered
    /// alphabetically on the wire, with the device name in the middle.
    pub fn enable_device_snmpv3(
        &mut self,
        token: &str,
        auth_pass: &str,
        auth_proto: &str,
        context: &str,
        device_name: &str,
        priv_pass: &str,
        priv_proto: &str,
        user_name: &str,
    ) -> Result<Value> {
        self.invoke(
            "enableDeviceSnmpv3",
            vec![
                token.into(),
                auth_pass.into(),
                auth_proto.into(),
                context.into(),
                device_name.into(),
                priv_pass.into(),
                priv_proto.into(),
                user_name.into(),
            ],
        )
    }

    /// Disable use of SNMPv3 on the device.
    pub fn disable_device_snmpv3(&mut self, token: &str, device_name: &str) -> Result<Value> {
        self.invoke(
            "disableDeviceSnmpv3",
            vec![token.into(), device_name.into()],
        )
    }

    /// The SNMPv3 configuration of the device, if any.
    pub fn get_device_snmpv3(&mut self, token: &str, device_name: &str) -> Result<Value> {
        self.invoke("getDeviceSnmpv3", vec![token.into(), device_name.into()])
    }
}
