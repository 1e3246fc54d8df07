//! Shared account operations
//!
//! Shared accounts are non-personal billing accounts that users can be
//! granted access to. Subaccounts are addressed as `parent\sub`.

use crate::proxy::ServerSession;
use crate::Result;
use printadm_core::xmlrpc::Value;

use super::name_value_pairs;

impl ServerSession {
    /// Create a new shared account. Use a backslash to denote a subaccount,
    /// e.g. `parent\sub`.
    pub fn add_new_shared_account(
        &mut self,
        token: &str,
        shared_account_name: &str,
    ) -> Result<Value> {
        self.invoke(
            "addNewSharedAccount",
            vec![token.into(), shared_account_name.into()],
        )
    }

    /// Permanently delete a shared account. Print history records remain.
    pub fn delete_existing_shared_account(
        &mut self,
        token: &str,
        shared_account_name: &str,
    ) -> Result<Value> {
        self.invoke(
            "deleteExistingSharedAccount",
            vec![token.into(), shared_account_name.into()],
        )
    }

    /// Rename an existing shared account.
    pub fn rename_shared_account(
        &mut self,
        token: &str,
        current_shared_account_name: &str,
        new_shared_account_name: &str,
    ) -> Result<Value> {
        self.invoke(
            "renameSharedAccount",
            vec![
                token.into(),
                current_shared_account_name.into(),
                new_shared_account_name.into(),
            ],
        )
    }

    /// Test whether a shared account exists.
    pub fn is_shared_account_exists(&mut self, token: &str, account_name: &str) -> Result<Value> {
        self.invoke(
            "isSharedAccountExists",
            vec![token.into(), account_name.into()],
        )
    }

    /// List shared accounts sorted by name, one page at a time.
    pub fn list_shared_accounts(&mut self, token: &str, offset: i32, limit: i32) -> Result<Value> {
        self.invoke(
            "listSharedAccounts",
            vec![token.into(), offset.into(), limit.into()],
        )
    }

    /// List the shared accounts a user has access to, one page at a time.
    /// `ignore_account_mode` lists accounts regardless of the current
    /// shared account mode.
    pub fn list_user_shared_accounts(
        &mut self,
        token: &str,
        user_name: &str,
        offset: i32,
        limit: i32,
        ignore_account_mode: bool,
    ) -> Result<Value> {
        self.invoke(
            "listUserSharedAccounts",
            vec![
                token.into(),
                user_name.into(),
                offset.into(),
                limit.into(),
                ignore_account_mode.into(),
            ],
        )
    }

    /// The current balance of a shared account.
    pub fn get_shared_account_account_balance(
        &mut self,
        token: &str,
        account_name: &str,
    ) -> Result<Value> {
        self.invoke(
            "getSharedAccountAccountBalance",
            vec![token.into(), account_name.into()],
        )
    }

    /// Adjust a shared account's balance. Positive adjustments add credit,
    /// negative subtract.
    pub fn adjust_shared_account_account_balance(
        &mut self,
        token: &str,
        account_name: &str,
        adjustment: f64,
        comment: Option<&str>,
    ) -> Result<Value> {
        self.invoke(
            "adjustSharedAccountAccountBalance",
            vec![
                token.into(),
                account_name.into(),
                adjustment.into(),
                comment.into(),
            ],
        )
    }

    /// Set a shared account's balance to an absolute value, recorded as a
    /// transaction.
    pub fn set_shared_account_account_balance(
        &mut self,
        token: &str,
        account_name: &str,
        balance: f64,
        comment: Option<&str>,
    ) -> Result<Value> {
        self.invoke(
            "setSharedAccountAccountBalance",
            vec![
                token.into(),
                account_name.into(),
                balance.into(),
                comment.into(),
            ],
        )
    }

    /// Disable a shared account for the given number of minutes.
    pub fn disable_shared_account(
        &mut self,
        token: &str,
        shared_account_name: &str,
        disable_mins: i32,
    ) -> Result<Value> {
        self.invoke(
            "disableSharedAccount",
            vec![
                token.into(),
                shared_account_name.into(),
                disable_mins.into(),
            ],
        )
    }

    /// The shared account's overdraft mode, `individual` or `default`.
    pub fn get_shared_account_overdraft_mode(
        &mut self,
        token: &str,
        account_name: &str,
    ) -> Result<Value> {
        self.invoke(
            "getSharedAccountOverdraftMode",
            vec![token.into(), account_name.into()],
        )
    }

    /// Set the shared account's overdraft mode. Valid modes are
    /// `individual` and `default`; the server rejects anything else.
    pub fn set_shared_account_overdraft_mode(
        &mut self,
        token: &str,
        account_name: &str,
        mode: &str,
    ) -> Result<Value> {
        self.invoke(
            "setSharedAccountOverdraftMode",
            vec![token.into(), account_name.into(), mode.into()],
        )
    }

    /// Get a shared account property.
    ///
    /// Property names include `access-groups`, `access-users`, `account-id`,
    /// `balance`, `comment-option`, `disabled`, `invoice-option`, `notes`,
    /// `overdraft-amount`, `pin` and `restricted`.
    pub fn get_shared_account_property(
        &mut self,
        token: &str,
        shared_account_name: &str,
        property_name: &str,
    ) -> Result<Value> {
        self.invoke(
            "getSharedAccountProperty",
            vec![
                token.into(),
                shared_account_name.into(),
                property_name.into(),
            ],
        )
    }

    /// Get multiple shared account properties in one call. The values come
    /// back in the order the names were given.
    pub fn get_shared_account_properties(
        &mut self,
        token: &str,
        shared_account_name: &str,
        property_names: &[&str],
    ) -> Result<Value> {
        self.invoke(
            "getSharedAccountProperties",
            vec![
                token.into(),
                shared_account_name.into(),
                property_names.into(),
            ],
        )
    }

    /// Set a shared account property. See
    /// [`get_shared_account_property`](Self::get_shared_account_property)
    /// for the property names.
    pub fn set_shared_account_property(
        &mut self,
        token: &str,
        shared_account_name: &str,
        property_name: &str,
        property_value: &str,
    ) -> Result<Value> {
        self.invoke(
            "setSharedAccountProperty",
            vec![
                token.into(),
                shared_account_name.into(),
                property_name.into(),
                property_value.into(),
            ],
        )
    }

    /// Set multiple shared account properties in one call, e.g.
    /// `[("balance", "1.20"), ("invoice-option", "ALWAYS_INVOICE")]`.
    pub fn set_shared_account_properties(
        &mut self,
        token: &str,
        shared_account_name: &str,
        properties: &[(&str, &str)],
    ) -> Result<Value> {
        self.invoke(
            "setSharedAccountProperties",
            vec![
                token.into(),
                shared_account_name.into(),
                name_value_pairs(properties),
            ],
        )
    }

    /// Allow a user access to a shared account without a PIN.
    pub fn add_shared_account_access_user(
        &mut self,
        token: &str,
        shared_account_name: &str,
        user_name: &str,
    ) -> Result<Value> {
        self.invoke(
            "addSharedAccountAccessUser",
            vec![token.into(), shared_account_name.into(), user_name.into()],
        )
    }

    /// Revoke a user's access to a shared account.
    pub fn remove_shared_account_access_user(
        &mut self,
        token: &str,
        shared_account_name: &str,
        user_name: &str,
    ) -> Result<Value> {
        self.invoke(
            "removeSharedAccountAccessUser",
            vec![token.into(), shared_account_name.into(), user_name.into()],
        )
    }

    /// Allow a group access to a shared account without a PIN.
    pub fn add_shared_account_access_group(
        &mut self,
        token: &str,
        shared_account_name: &str,
        group_name: &str,
    ) -> Result<Value> {
        self.invoke(
            "addSharedAccountAccessGroup",
            vec![token.into(), shared_account_name.into(), group_name.into()],
        )
    }

    /// Revoke a group's access to a shared account.
    pub fn remove_shared_account_access_group(
        &mut self,
        token: &str,
        shared_account_name: &str,
        group_name: &str,
    ) -> Result<Value> {
        self.invoke(
            "removeSharedAccountAccessGroup",
            vec![token.into(), shared_account_name.into(), group_name.into()],
        )
    }

    /// Import shared accounts from a tab-delimited file on the server.
    /// With `test` set, the import is simulated and nothing is modified;
    /// `delete_non_existent_accounts` removes accounts absent from the file.
    /// Returns feedback about the sync operation.
    pub fn batch_import_shared_accounts(
        &mut self,
        token: &str,
        import_file: &str,
        test: bool,
        delete_non_existent_accounts: bool,
    ) -> Result<Value> {
        self.invoke(
            "batchImportSharedAccounts",
            vec![
                token.into(),
                import_file.into(),
                test.into(),
                delete_non_existent_accounts.into(),
            ],
        )
    }
}
