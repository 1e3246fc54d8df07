//! Printer operations
//!
//! Printers are addressed by the pair of hosting server name and queue
//! name, exactly as they appear in the OS.

use crate::proxy::ServerSession;
use crate::Result;
use printadm_core::xmlrpc::Value;

use super::name_value_pairs;

impl ServerSession {
    /// List printers sorted by name, one page at a time.
    pub fn list_printers(&mut self, token: &str, offset: i32, limit: i32) -> Result<Value> {
        self.invoke(
            "listPrinters",
            vec![token.into(), offset.into(), limit.into()],
        )
    }

    /// Delete a printer. Set `printer_name` to `[All Printers]` to delete
    /// every printer on the server.
    pub fn delete_printer(
        &mut self,
        token: &str,
        server_name: &str,
        printer_name: &str,
    ) -> Result<Value> {
        self.invoke(
            "deletePrinter",
            vec![token.into(), server_name.into(), printer_name.into()],
        )
    }

    /// Rename a printer, keeping its history and settings. Useful after a
    /// queue or print server migration; names are matched case-sensitively
    /// in some environments.
    pub fn rename_printer(
        &mut self,
        token: &str,
        server_name: &str,
        printer_name: &str,
        new_server_name: &str,
        new_printer_name: &str,
    ) -> Result<Value> {
        self.invoke(
            "renamePrinter",
            vec![
                token.into(),
                server_name.into(),
                printer_name.into(),
                new_server_name.into(),
                new_printer_name.into(),
            ],
        )
    }

    /// Enable a printer.
    pub fn enable_printer(
        &mut self,
        token: &str,
        server_name: &str,
        printer_name: &str,
    ) -> Result<Value> {
        self.invoke(
            "enablePrinter",
            vec![token.into(), server_name.into(), printer_name.into()],
        )
    }

    /// Disable a printer for the given number of minutes; `-1` disables it
    /// until re-enabled.
    pub fn disable_printer(
        &mut self,
        token: &str,
        server_name: &str,
        printer_name: &str,
        disable_mins: i32,
    ) -> Result<Value> {
        self.invoke(
            "disablePrinter",
            vec![
                token.into(),
                server_name.into(),
                printer_name.into(),
                disable_mins.into(),
            ],
        )
    }

    /// Add a printer to a single printer group.
    pub fn add_printer_group(
        &mut self,
        token: &str,
        server_name: &str,
        printer_name: &str,
        printer_group_name: &str,
    ) -> Result<Value> {
        self.invoke(
            "addPrinterGroup",
            vec![
                token.into(),
                server_name.into(),
                printer_name.into(),
                printer_group_name.into(),
            ],
        )
    }

    /// Set the printer groups a printer belongs to, overwriting any
    /// existing membership. An empty list clears all group associations.
    pub fn set_printer_groups(
        &mut self,
        token: &str,
        server_name: &str,
        printer_name: &str,
        printer_group_names: &[&str],
    ) -> Result<Value> {
        self.invoke(
            "setPrinterGroups",
            vec![
                token.into(),
                server_name.into(),
                printer_name.into(),
                printer_group_names.into(),
            ],
        )
    }

    /// Add a group to the list of groups allowed to print to this printer.
    pub fn add_printer_access_group(
        &mut self,
        token: &str,
        server_name: &str,
        printer_name: &str,
        group_name: &str,
    ) -> Result<Value> {
        self.invoke(
            "addPrinterAccessGroup",
            vec![
                token.into(),
                server_name.into(),
                printer_name.into(),
                group_name.into(),
            ],
        )
    }

    /// Remove a group from the printer's access group list.
    pub fn remove_printer_access_group(
        &mut self,
        token: &str,
        server_name: &str,
        printer_name: &str,
        group_name: &str,
    ) -> Result<Value> {
        self.invoke(
            "removePrinterAccessGroup",
            vec![
                token.into(),
                server_name.into(),
                printer_name.into(),
                group_name.into(),
            ],
        )
    }

    /// Get a printer property. Names include `cost-model`, `disabled`,
    /// `printer-id`, `custom-field-1` through `custom-field-6`,
    /// `print-stats.job-count` and `print-stats.page-count`.
    pub fn get_printer_property(
        &mut self,
        token: &str,
        server_name: &str,
        printer_name: &str,
        property_name: &str,
    ) -> Result<Value> {
        self.invoke(
            "getPrinterProperty",
            vec![
                token.into(),
                server_name.into(),
                printer_name.into(),
                property_name.into(),
            ],
        )
    }

    /// Get multiple printer properties in one call. The values come back in
    /// the order the names were given.
    pub fn get_printer_properties(
        &mut self,
        token: &str,
        server_name: &str,
        printer_name: &str,
        property_names: &[&str],
    ) -> Result<Value> {
        self.invoke(
            "getPrinterProperties",
            vec![
                token.into(),
                server_name.into(),
                printer_name.into(),
                property_names.into(),
            ],
        )
    }

    /// Set a printer property.
    ///
    /// For `cost-model` the valid values are `SIMPLE`, `AREA`, `SIZE_TABLE`,
    /// `SIZE_CATEGORY`, `SIZE_DETAILED` and `SIZE_LENGTH`.
    ///
    /// The remote procedure takes the property name and value *before* the
    /// server and printer names; the parameter list below is in wire order.
    pub fn set_printer_property(
        &mut self,
        token: &str,
        server_name: &str,
        printer_name: &str,
        property_name: &str,
        property_value: &str,
    ) -> Result<Value> {
        self.invoke(
            "setPrinterProperty",
            vec![
                token.into(),
                property_name.into(),
                property_value.into(),
                server_name.into(),
                printer_name.into(),
            ],
        )
    }

    /// Set multiple printer properties in one call, e.g.
    /// `[("disabled", "false"), ("custom-field-1", "East Wing")]`.
    pub fn set_printer_properties(
        &mut self,
        token: &str,
        server_name: &str,
        printer_name: &str,
        properties: &[(&str, &str)],
    ) -> Result<Value> {
        self.invoke(
            "setPrinterProperties",
            vec![
                token.into(),
                server_name.into(),
                printer_name.into(),
                name_value_pairs(properties),
            ],
        )
    }

    /// The page cost, if and only if the printer uses the simple charging
    /// model. Any other cost model makes the server fault.
    pub fn get_printer_cost_simple(
        &mut self,
        token: &str,
        server_name: &str,
        printer_name: &str,
    ) -> Result<Value> {
        self.invoke(
            "getPrinterCostSimple",
            vec![token.into(), server_name.into(), printer_name.into()],
        )
    }

    /// Set a single per-page cost using the simple charging model.
    pub fn set_printer_cost_simple(
        &mut self,
        token: &str,
        server_name: &str,
        printer_name: &str,
        cost_per_page: f64,
    ) -> Result<Value> {
        self.invoke(
            "setPrinterCostSimple",
            vec![
                token.into(),
                server_name.into(),
                printer_name.into(),
                cost_per_page.into(),
            ],
        )
    }

    /// Reset the page and job counts associated with a printer.
    pub fn reset_printer_counts(
        &mut self,
        token: &str,
        server_name: &str,
        printer_name: &str,
        reset_by: &str,
    ) -> Result<Value> {
        self.invoke(
            "resetPrinterCounts",
            vec![
                token.into(),
                server_name.into(),
                printer_name.into(),
                reset_by.into(),
            ],
        )
    }

    /// Update printers from a tab-delimited import file on the server,
    /// creating them if required.
    pub fn batch_import_printers(&mut self, token: &str, import_file: &str) -> Result<Value> {
        self.invoke(
            "batchImportPrinters",
            vec![token.into(), import_file.into()],
        )
    }

    /// Set the SNMPv3 configuration for a printer.
    pub fn enable_printer_snmpv3(
        &mut self,
        token: &str,
        server_name: &str,
        printer_name: &str,
        context: &str,
        user_name: &str,
        auth_pass: &str,
        priv_pass: &str,
        auth_proto: &str,
        priv_proto: &str,
    ) -> Result<Value> {
        self.invoke(
            "enablePrinterSnmpv3",
            vec![
                token.into(),
                server_name.into(),
                printer_name.into(),
                context.into(),
                user_name.into(),
                auth_pass.into(),
                priv_pass.into(),
                auth_proto.into(),
                priv_proto.into(),
            ],
        )
    }

    /// Disable use of SNMPv3 on the printer.
    pub fn disable_printer_snmpv3(
        &mut self,
        token: &str,
        server_name: &str,
        printer_name: &str,
    ) -> Result<Value> {
        self.invoke(
            "disablePrinterSnmpv3",
            vec![token.into(), server_name.into(), printer_name.into()],
        )
    }

    /// The SNMPv3 configuration of the printer, if any.
    pub fn get_printer_snmpv3(
        &mut self,
        token: &str,
        server_name: &str,
        printer_name: &str,
    ) -> Result<Value> {
        self.invoke(
            "getPrinterSnmpv3",
            vec![token.into(), server_name.into(), printer_name.into()],
        )
    }
}
