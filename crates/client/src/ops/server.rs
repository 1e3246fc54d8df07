//! Server administration operations
//!
//! Admin rights, server configuration, synchronization, backup and
//! reporting. The sync and backup operations are fire-and-forget: the call
//! returns once the server acknowledges the start, and completion is
//! observed by polling [`get_task_status`](ServerSession::get_task_status).

use crate::proxy::ServerSession;
use crate::Result;
use printadm_core::xmlrpc::Value;

impl ServerSession {
    /// Grant a user administrator rights with the default admin permissions.
    pub fn add_admin_access_user(&mut self, token: &str, user_name: &str) -> Result<Value> {
        self.invoke("addAdminAccessUser", vec![token.into(), user_name.into()])
    }

    /// Remove a user from the list of administrators.
    pub fn remove_admin_access_user(&mut self, token: &str, user_name: &str) -> Result<Value> {
        self.invoke(
            "removeAdminAccessUser",
            vec![token.into(), user_name.into()],
        )
    }

    /// Grant a group admin rights with the default admin permissions.
    pub fn add_admin_access_group(&mut self, token: &str, group_name: &str) -> Result<Value> {
        self.invoke("addAdminAccessGroup", vec![token.into(), group_name.into()])
    }

    /// Remove a group from the list of admin groups.
    pub fn remove_admin_access_group(&mut self, token: &str, group_name: &str) -> Result<Value> {
        self.invoke(
            "removeAdminAccessGroup",
            vec![token.into(), group_name.into()],
        )
    }

    /// Get a server configuration value; a blank string when the key does
    /// not exist.
    pub fn get_config_value(&mut self, token: &str, config_name: &str) -> Result<Value> {
        self.invoke("getConfigValue", vec![token.into(), config_name.into()])
    }

    /// Set a server configuration value. Editing config keys can leave the
    /// server in a state only a reinstall fixes; the server applies no
    /// safety checks on your behalf.
    pub fn set_config_value(
        &mut self,
        token: &str,
        config_name: &str,
        config_value: &str,
    ) -> Result<Value> {
        self.invoke(
            "setConfigValue",
            vec![token.into(), config_name.into(), config_value.into()],
        )
    }

    /// Change the built-in admin password. The new password cannot be
    /// blank.
    pub fn change_internal_admin_password(
        &mut self,
        token: &str,
        new_password: &str,
    ) -> Result<Value> {
        self.invoke(
            "changeInternalAdminPassword",
            vec![token.into(), new_password.into()],
        )
    }

    /// Run a custom server command and return its status message.
    pub fn run_command(
        &mut self,
        token: &str,
        command_name: &str,
        args: &[&str],
    ) -> Result<Value> {
        self.invoke(
            "runCommand",
            vec![token.into(), command_name.into(), args.into()],
        )
    }

    /// Log and charge a job from its details string as if it were printed,
    /// bypassing filters, popups and hold/release queues. `job_details` is
    /// a comma-separated list of `name=value` pairs.
    pub fn process_job(&mut self, token: &str, job_details: &str) -> Result<Value> {
        self.invoke("processJob", vec![token.into(), job_details.into()])
    }

    /// The status of the latest long-running task (sync, import, backup):
    /// a struct with a completed flag and any status message.
    pub fn get_task_status(&mut self, token: &str) -> Result<Value> {
        self.invoke("getTaskStatus", vec![token.into()])
    }

    /// Start synchronizing group membership with the OS/network/domain
    /// directory. Runs in the background; poll
    /// [`get_task_status`](Self::get_task_status) for completion.
    pub fn perform_group_sync(&mut self, token: &str) -> Result<Value> {
        self.invoke("performGroupSync", vec![token.into()])
    }

    /// Start a full user and group synchronization, equivalent to
    /// "Synchronize Now" in the admin interface. Runs in the background.
    pub fn perform_user_and_group_sync(&mut self, token: &str) -> Result<Value> {
        self.invoke("performUserAndGroupSync", vec![token.into()])
    }

    /// Start a user and group synchronization with explicit control over
    /// deleting departed users and refreshing user details. Runs in the
    /// background.
    pub fn perform_user_and_group_sync_advanced(
        &mut self,
        token: &str,
        delete_non_existent_users: bool,
        update_user_details: bool,
    ) -> Result<Value> {
        self.invoke(
            "performUserAndGroupSyncAdvanced",
            vec![
                token.into(),
                delete_non_existent_users.into(),
                update_user_details.into(),
            ],
        )
    }

    /// Start an online backup, equivalent to the manual backup button in
    /// the admin interface. The archive lands in the server's backups
    /// directory; the call returns once the backup has been initiated.
    pub fn perform_online_backup(&mut self, token: &str) -> Result<Value> {
        self.invoke("performOnlineBackup", vec![token.into()])
    }

    /// Generate an ad-hoc report and save it on the server.
    pub fn generate_ad_hoc_report(
        &mut self,
        token: &str,
        report_type: &str,
        data_params: &str,
        export_type_ext: &str,
        report_title: &str,
        save_location: &str,
    ) -> Result<Value> {
        self.invoke(
            "generateAdHocReport",
            vec![
                token.into(),
                report_type.into(),
                data_params.into(),
                export_type_ext.into(),
                report_title.into(),
                save_location.into(),
            ],
        )
    }

    /// Generate a named scheduled report and save it on the server.
    pub fn generate_scheduled_report(
        &mut self,
        token: &str,
        report_title: &str,
        save_location: &str,
    ) -> Result<Value> {
        self.invoke(
            "generateScheduledReport",
            vec![token.into(), report_title.into(), save_location.into()],
        )
    }

    /// Save a server thread snapshot to the debug log.
    pub fn save_thread_snapshot(&mut self, token: &str) -> Result<Value> {
        self.invoke("saveThreadSnapshot", vec![token.into()])
    }

    /// Install a new license from a file on the server.
    pub fn install_license(&mut self, token: &str, license_file: &str) -> Result<Value> {
        self.invoke("installLicense", vec![token.into(), license_file.into()])
    }

    /// Ask the server to write the client accounts file
    /// (`server/data/client/client-accounts.dat`) for distribution to
    /// remote sites. Synchronous: returns once the file is written.
    pub fn create_user_client_accounts_file(&mut self, token: &str) -> Result<Value> {
        self.invoke("createUserClientAccountsFile", vec![token.into()])
    }
}
