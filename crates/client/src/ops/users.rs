//! User account operations

use crate::proxy::ServerSession;
use crate::Result;
use printadm_core::xmlrpc::Value;

use super::name_value_pairs;

impl ServerSession {
    /// Trigger the process of adding a new user account, as if the user had
    /// printed for the first time. The user must already exist in the
    /// OS/network/domain user directory; initial settings follow the rules
    /// configured for their groups.
    pub fn add_new_user(&mut self, token: &str, user_name: &str) -> Result<Value> {
        self.invoke("addNewUser", vec![token.into(), user_name.into()])
    }

    /// Start a specialized sync that adds directory users missing from the
    /// system. Existing accounts are left untouched; progress is reported
    /// through [`get_task_status`](Self::get_task_status).
    pub fn add_new_users(&mut self, token: &str) -> Result<Value> {
        self.invoke("addNewUsers", vec![token.into()])
    }

    /// Create and set up a new internal user account.
    ///
    /// Username and password are required; the remaining details are
    /// optional and may also be set later through the property setters.
    /// The server rejects usernames that already exist.
    pub fn add_new_internal_user(
        &mut self,
        token: &str,
        user_name: &str,
        password: &str,
        full_name: Option<&str>,
        email: Option<&str>,
        card_id: Option<&str>,
        pin: Option<i32>,
    ) -> Result<Value> {
        self.invoke(
            "addNewInternalUser",
            vec![
                token.into(),
                user_name.into(),
                password.into(),
                full_name.into(),
                email.into(),
                card_id.into(),
                pin.into(),
            ],
        )
    }

    /// Import user details from a tab-delimited file on the server.
    /// `create_new_users` controls whether unknown users are created or
    /// only existing ones updated.
    pub fn batch_import_users(
        &mut self,
        token: &str,
        import_file: &str,
        create_new_users: bool,
    ) -> Result<Value> {
        self.invoke(
            "batchImportUsers",
            vec![token.into(), import_file.into(), create_new_users.into()],
        )
    }

    /// Import internal users from a tab-delimited file on the server.
    pub fn batch_import_internal_users(
        &mut self,
        token: &str,
        import_file: &str,
        overwrite_existing_passwords: bool,
        overwrite_existing_pins: bool,
        email_user_on_creation: bool,
    ) -> Result<Value> {
        self.invoke(
            "batchImportInternalUsers",
            vec![
                token.into(),
                import_file.into(),
                overwrite_existing_passwords.into(),
                overwrite_existing_pins.into(),
                email_user_on_creation.into(),
            ],
        )
    }

    /// Import user card/ID numbers and PINs from a tab-delimited file on
    /// the server.
    pub fn batch_import_user_card_id_numbers(
        &mut self,
        token: &str,
        import_file: &str,
        overwrite_existing_pins: bool,
    ) -> Result<Value> {
        self.invoke(
            "batchImportUserCardIdNumbers",
            vec![
                token.into(),
                import_file.into(),
                overwrite_existing_pins.into(),
            ],
        )
    }

    /// Permanently delete a user from the user list. Print and transaction
    /// history remains; `redact_user_data` additionally redacts the user's
    /// personal data.
    pub fn delete_existing_user(
        &mut self,
        token: &str,
        user_name: &str,
        redact_user_data: bool,
    ) -> Result<Value> {
        self.invoke(
            "deleteExistingUser",
            vec![token.into(), user_name.into(), redact_user_data.into()],
        )
    }

    /// Rename a user account, keeping its usage history. Perform together
    /// with the rename in the domain/user directory.
    pub fn rename_user_account(
        &mut self,
        token: &str,
        current_user_name: &str,
        new_user_name: &str,
    ) -> Result<Value> {
        self.invoke(
            "renameUserAccount",
            vec![token.into(), current_user_name.into(), new_user_name.into()],
        )
    }

    /// Test whether a user exists in the system.
    pub fn is_user_exists(&mut self, token: &str, user_name: &str) -> Result<Value> {
        self.invoke("isUserExists", vec![token.into(), user_name.into()])
    }

    /// The count of all users in the system.
    pub fn get_total_users(&mut self, token: &str) -> Result<Value> {
        self.invoke("getTotalUsers", vec![token.into()])
    }

    /// List user accounts sorted by username, one page at a time. See
    /// [`DEFAULT_LIMIT`](super::DEFAULT_LIMIT) for the recommended page size.
    pub fn list_user_accounts(&mut self, token: &str, offset: i32, limit: i32) -> Result<Value> {
        self.invoke(
            "listUserAccounts",
            vec![token.into(), offset.into(), limit.into()],
        )
    }

    /// Get a user property.
    ///
    /// Property names include `balance`, `full-name`, `email`, `department`,
    /// `office`, `notes`, `home`, `restricted`, `disabled-print`,
    /// `internal`, `unauthenticated`, `username-alias`, `other-emails`,
    /// `primary-card-number`, `secondary-card-number`, `overdraft-amount`,
    /// `printer-cost-adjustment-rate-percent`, `auto-release-jobs`,
    /// `dont-hold-jobs-in-release-station`, `dont-apply-printer-filter-rules`,
    /// `dont-archive`, the statistics `print-stats.job-count`,
    /// `print-stats.page-count`, `net-stats.data-mb`, `net-stats.time-hours`,
    /// and the account-selection settings `account-selection.mode`
    /// (`AUTO_CHARGE_TO_PERSONAL_ACCOUNT`, `AUTO_CHARGE_TO_SHARED`,
    /// `CHARGE_TO_PERSONAL_ACCOUNT_WITH_CONFIRMATION`,
    /// `SHOW_ACCOUNT_SELECTION_POPUP`, `SHOW_ADVANCED_ACCOUNT_SELECTION_POPUP`,
    /// `SHOW_MANAGER_MODE_POPUP`), `account-selection.can-charge-personal`,
    /// `account-selection.can-charge-shared-by-pin`,
    /// `account-selection.can-charge-shared-from-list` and
    /// `auto-shared-account`.
    pub fn get_user_property(
        &mut self,
        token: &str,
        user_name: &str,
        property_name: &str,
    ) -> Result<Value> {
        self.invoke(
            "getUserProperty",
            vec![token.into(), user_name.into(), property_name.into()],
        )
    }

    /// Get multiple user properties in one call. The values come back in
    /// the order the names were given.
    pub fn get_user_properties(
        &mut self,
        token: &str,
        user_name: &str,
        property_names: &[&str],
    ) -> Result<Value> {
        self.invoke(
            "getUserProperties",
            vec![token.into(), user_name.into(), property_names.into()],
        )
    }

    /// Set a user property.
    ///
    /// Settable names include `balance`, `primary-card-number`,
    /// `secondary-card-number`, `card-pin`, `department`, `disabled-print`,
    /// `email`, `full-name`, `notes`, `office`, `password`,
    /// `print-stats.job-count`, `print-stats.page-count`,
    /// `net-stats.data-mb`, `net-stats.time-hours`, `restricted` and `home`.
    pub fn set_user_property(
        &mut self,
        token: &str,
        user_name: &str,
        property_name: &str,
        property_value: &str,
    ) -> Result<Value> {
        self.invoke(
            "setUserProperty",
            vec![
                token.into(),
                user_name.into(),
                property_name.into(),
                property_value.into(),
            ],
        )
    }

    /// Set multiple user properties in one call, e.g.
    /// `[("balance", "1.20"), ("office", "East Wing")]`.
    pub fn set_user_properties(
        &mut self,
        token: &str,
        user_name: &str,
        properties: &[(&str, &str)],
    ) -> Result<Value> {
        self.invoke(
            "setUserProperties",
            vec![
                token.into(),
                user_name.into(),
                name_value_pairs(properties),
            ],
        )
    }

    /// A user's current account balance. With an `account_name` the balance
    /// of that personal account is returned; without, the total balance.
    pub fn get_user_account_balance(
        &mut self,
        token: &str,
        user_name: &str,
        account_name: Option<&str>,
    ) -> Result<Value> {
        self.invoke(
            "getUserAccountBalance",
            vec![token.into(), user_name.into(), account_name.into()],
        )
    }

    /// Adjust a user's account balance. Positive adjustments add credit,
    /// negative subtract. Without an `account_name` the built-in default
    /// account is adjusted.
    ///
    /// The remote procedure takes the comment *before* the account name,
    /// unlike this signature; the parameter list below is in wire order.
    pub fn adjust_user_account_balance(
        &mut self,
        token: &str,
        user_name: &str,
        adjustment: f64,
        account_name: Option<&str>,
        comment: Option<&str>,
    ) -> Result<Value> {
        self.invoke(
            "adjustUserAccountBalance",
            vec![
                token.into(),
                user_name.into(),
                adjustment.into(),
                comment.into(),
                account_name.into(),
            ],
        )
    }

    /// Adjust the balance of the user holding the given card number.
    /// Returns false when no user matches the card.
    pub fn adjust_user_account_balance_by_card_number(
        &mut self,
        token: &str,
        card_number: i32,
        adjustment: f64,
        comment: Option<&str>,
        account_name: Option<&str>,
    ) -> Result<Value> {
        self.invoke(
            "adjustUserAccountBalanceByCardNumber",
            vec![
                token.into(),
                card_number.into(),
                adjustment.into(),
                comment.into(),
                account_name.into(),
            ],
        )
    }

    /// Adjust a user's balance only if enough credit is available, as one
    /// atomic operation. Returns false when the user lacks the credit.
    pub fn adjust_user_account_balance_if_available(
        &mut self,
        token: &str,
        user_name: &str,
        adjustment: f64,
        comment: Option<&str>,
    ) -> Result<Value> {
        self.invoke(
            "adjustUserAccountBalanceIfAvailable",
            vec![
                token.into(),
                user_name.into(),
                adjustment.into(),
                comment.into(),
            ],
        )
    }

    /// Like [`adjust_user_account_balance_if_available`], but keeps at least
    /// `leave_remaining` credit available in the account.
    ///
    /// [`adjust_user_account_balance_if_available`]: Self::adjust_user_account_balance_if_available
    pub fn adjust_user_account_balance_if_available_leave_remaining(
        &mut self,
        token: &str,
        user_name: &str,
        adjustment: f64,
        leave_remaining: f64,
        comment: Option<&str>,
        account_name: Option<&str>,
    ) -> Result<Value> {
        self.invoke(
            "adjustUserAccountBalanceIfAvailableLeaveRemaining",
            vec![
                token.into(),
                user_name.into(),
                adjustment.into(),
                leave_remaining.into(),
                comment.into(),
                account_name.into(),
            ],
        )
    }

    /// Set a user's balance to an absolute value, recorded as a transaction.
    pub fn set_user_account_balance(
        &mut self,
        token: &str,
        user_name: &str,
        balance: f64,
        comment: Option<&str>,
        account_name: Option<&str>,
    ) -> Result<Value> {
        self.invoke(
            "setUserAccountBalance",
            vec![
                token.into(),
                user_name.into(),
                balance.into(),
                comment.into(),
                account_name.into(),
            ],
        )
    }

    /// Reset the page and job counts associated with a user account.
    pub fn reset_user_counts(
        &mut self,
        token: &str,
        user_name: &str,
        reset_by: &str,
    ) -> Result<Value> {
        self.invoke(
            "resetUserCounts",
            vec![token.into(), user_name.into(), reset_by.into()],
        )
    }

    /// Re-apply initial user settings (derived from group membership) to
    /// the given user.
    pub fn reapply_initial_user_settings(&mut self, token: &str, user_name: &str) -> Result<Value> {
        self.invoke(
            "reapplyInitialUserSettings",
            vec![token.into(), user_name.into()],
        )
    }

    /// Disable printing for a user for the given number of minutes.
    pub fn disable_printing_for_user(
        &mut self,
        token: &str,
        user_name: &str,
        disable_mins: i32,
    ) -> Result<Value> {
        self.invoke(
            "disablePrintingForUser",
            vec![token.into(), user_name.into(), disable_mins.into()],
        )
    }

    /// Clear the user's advanced printer settings
    /// (`dont-hold-jobs-in-release-station`, `dont-apply-printer-filter-rules`,
    /// `printer-cost-adjustment-rate-percent`, `dont-archive`,
    /// `auto-release-jobs`).
    pub fn clear_user_advanced_printer_settings(
        &mut self,
        token: &str,
        user_name: &str,
    ) -> Result<Value> {
        self.invoke(
            "clearUserAdvancedPrinterSettings",
            vec![token.into(), user_name.into()],
        )
    }

    /// The user's overdraft mode, `individual` or `default`.
    pub fn get_user_overdraft_mode(&mut self, token: &str, user_name: &str) -> Result<Value> {
        self.invoke("getUserOverdraftMode", vec![token.into(), user_name.into()])
    }

    /// Set the user's overdraft mode. Valid modes are `individual` and
    /// `default`; the server rejects anything else.
    pub fn set_user_overdraft_mode(
        &mut self,
        token: &str,
        user_name: &str,
        mode: &str,
    ) -> Result<Value> {
        self.invoke(
            "setUserOverdraftMode",
            vec![token.into(), user_name.into(), mode.into()],
        )
    }

    /// Look up a user name by card number; empty string when nothing
    /// matches.
    pub fn look_up_user_name_by_card_no(&mut self, token: &str, card_no: &str) -> Result<Value> {
        self.invoke(
            "lookUpUserNameByCardNo",
            vec![token.into(), card_no.into()],
        )
    }

    /// Look up a user name by ID number; empty string when nothing matches.
    pub fn look_up_user_name_by_id_no(&mut self, token: &str, id_no: i32) -> Result<Value> {
        self.invoke("lookUpUserNameByIDNo", vec![token.into(), id_no.into()])
    }

    /// Look up a user name by email address; empty string when nothing
    /// matches.
    pub fn look_up_user_name_by_email(&mut self, token: &str, email: &str) -> Result<Value> {
        self.invoke("lookUpUserNameByEmail", vec![token.into(), email.into()])
    }

    /// Look up a primary user name by secondary user name; empty string
    /// when nothing matches.
    pub fn look_up_user_name_by_secondary_user_name(
        &mut self,
        token: &str,
        secondary_user_name: &str,
    ) -> Result<Value> {
        self.invoke(
            "lookUpUserNameBySecondaryUserName",
            vec![token.into(), secondary_user_name.into()],
        )
    }

    /// Look up the user names matching a full name; empty list when nothing
    /// matches.
    pub fn look_up_users_by_full_name(&mut self, token: &str, full_name: &str) -> Result<Value> {
        self.invoke(
            "lookUpUsersByFullName",
            vec![token.into(), full_name.into()],
        )
    }

    /// Redeem a top-up card into a user's account. The server answers with
    /// one of `SUCCESS`, `CARD_HAS_EXPIRED`, `CARD_IS_USED`,
    /// `INVALID_CARD_NUMBER` or `UNKNOWN_USER`.
    pub fn use_card(&mut self, token: &str, user_name: &str, card_number: i32) -> Result<Value> {
        self.invoke(
            "useCard",
            vec![token.into(), user_name.into(), card_number.into()],
        )
    }

    /// Export a user's data history as predefined CSV reports written to
    /// `save_location` on the server.
    pub fn export_user_data_history(
        &mut self,
        token: &str,
        user_name: &str,
        save_location: &str,
    ) -> Result<Value> {
        self.invoke(
            "exportUserDataHistory",
            vec![token.into(), user_name.into(), save_location.into()],
        )
    }

    /// Set the user to charge automatically to their personal account,
    /// optionally confirming through a popup.
    pub fn set_user_account_selection_auto_charge_personal(
        &mut self,
        token: &str,
        user_name: &str,
        with_popup_confirmation: bool,
    ) -> Result<Value> {
        self.invoke(
            "setUserAccountSelectionAutoChargePersonal",
            vec![
                token.into(),
                user_name.into(),
                with_popup_confirmation.into(),
            ],
        )
    }

    /// Set the user to charge automatically to a single shared account.
    /// With `charge_to_personal`, the charge lands on the personal account
    /// and is allocated to the shared one.
    pub fn set_user_account_selection_auto_select_shared_account(
        &mut self,
        token: &str,
        user_name: &str,
        account_name: &str,
        charge_to_personal: bool,
    ) -> Result<Value> {
        self.invoke(
            "setUserAccountSelectionAutoSelectSharedAccount",
            vec![
                token.into(),
                user_name.into(),
                account_name.into(),
                charge_to_personal.into(),
            ],
        )
    }

    /// Switch the user to the standard account selection popup.
    pub fn set_user_account_selection_standard_popup(
        &mut self,
        token: &str,
        user_name: &str,
        allow_personal: bool,
        allow_list_selection: bool,
        allow_pin_code: bool,
        allow_printing_as_other_user: bool,
        charge_to_personal_when_shared_selected: bool,
        default_shared_account: Option<&str>,
    ) -> Result<Value> {
        self.invoke(
            "setUserAccountSelectionStandardPopup",
            vec![
                token.into(),
                user_name.into(),
                allow_personal.into(),
                allow_list_selection.into(),
                allow_pin_code.into(),
                allow_printing_as_other_user.into(),
                charge_to_personal_when_shared_selected.into(),
                default_shared_account.into(),
            ],
        )
    }

    /// Switch the user to the advanced account selection popup.
    pub fn set_user_account_selection_advanced_popup(
        &mut self,
        token: &str,
        user_name: &str,
        allow_personal: bool,
        charge_to_personal_when_shared_selected: bool,
        default_shared_account: Option<&str>,
    ) -> Result<Value> {
        self.invoke(
            "setUserAccountSelectionAdvancedPopup",
            vec![
                token.into(),
                user_name.into(),
                allow_personal.into(),
                charge_to_personal_when_shared_selected.into(),
                default_shared_account.into(),
            ],
        )
    }
}
