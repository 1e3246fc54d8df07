//! Group operations

use crate::proxy::ServerSession;
use crate::Result;
use printadm_core::xmlrpc::Value;

impl ServerSession {
    /// Add a group from the network user directory to the system's group
    /// list. The caller is responsible for the name being valid in the
    /// directory; progress can be watched with
    /// [`get_task_status`](Self::get_task_status).
    pub fn add_new_group(&mut self, token: &str, group_name: &str) -> Result<Value> {
        self.invoke("addNewGroup", vec![token.into(), group_name.into()])
    }

    /// Remove an existing group from the system.
    pub fn remove_group(&mut self, token: &str, group_name: &str) -> Result<Value> {
        self.invoke("removeGroup", vec![token.into(), group_name.into()])
    }

    /// Test whether a group exists.
    pub fn is_group_exists(&mut self, token: &str, group_name: &str) -> Result<Value> {
        self.invoke("isGroupExists", vec![token.into(), group_name.into()])
    }

    /// List user groups, one page at a time.
    pub fn list_user_groups(&mut self, token: &str, offset: i32, limit: i32) -> Result<Value> {
        self.invoke(
            "listUserGroups",
            vec![token.into(), offset.into(), limit.into()],
        )
    }

    /// List the members of a group, one page at a time.
    pub fn get_group_members(
        &mut self,
        token: &str,
        group_name: &str,
        offset: i32,
        limit: i32,
    ) -> Result<Value> {
        self.invoke(
            "getGroupMembers",
            vec![
                token.into(),
                group_name.into(),
                offset.into(),
                limit.into(),
            ],
        )
    }

    /// A user's group memberships.
    pub fn get_user_groups(&mut self, token: &str, user_name: &str) -> Result<Value> {
        self.invoke("getUserGroups", vec![token.into(), user_name.into()])
    }

    /// Add the user to the given group.
    pub fn add_user_to_group(
        &mut self,
        token: &str,
        user_name: &str,
        group_name: &str,
    ) -> Result<Value> {
        self.invoke(
            "addUserToGroup",
            vec![token.into(), user_name.into(), group_name.into()],
        )
    }

    /// Remove the user from the given group.
    pub fn remove_user_from_group(
        &mut self,
        token: &str,
        user_name: &str,
        group_name: &str,
    ) -> Result<Value> {
        self.invoke(
            "removeUserFromGroup",
            vec![token.into(), user_name.into(), group_name.into()],
        )
    }

    /// Sync one group's membership with the configured directory server.
    pub fn sync_group(&mut self, token: &str, group_name: &str) -> Result<Value> {
        self.invoke("syncGroup", vec![token.into(), group_name.into()])
    }

    /// The group's quota allocation settings, a struct with `QuotaAmount`,
    /// `QuotaPeriod` and `QuotaMaxAccumulation`.
    pub fn get_group_quota(&mut self, token: &str, group_name: &str) -> Result<Value> {
        self.invoke("getGroupQuota", vec![token.into(), group_name.into()])
    }

    /// Set the group's quota allocation. `period` is one of `NONE`, `DAILY`,
    /// `WEEKLY` or `MONTHLY`; a `quota_max_accumulation` of 0.0 means no
    /// limit.
    ///
    /// On the wire the period precedes the maximum accumulation; the list
    /// below is in wire order.
    pub fn set_group_quota(
        &mut self,
        token: &str,
        group_name: &str,
        quota_amount: f64,
        quota_max_accumulation: f64,
        period: &str,
    ) -> Result<Value> {
        self.invoke(
            "setGroupQuota",
            vec![
                token.into(),
                group_name.into(),
                quota_amount.into(),
                period.into(),
                quota_max_accumulation.into(),
            ],
        )
    }

    /// Adjust the balance of every user in a group.
    ///
    /// The remote procedure expects the account name *first*, before the
    /// group; the parameter list below is in wire order.
    pub fn adjust_user_account_balance_by_group(
        &mut self,
        token: &str,
        group: &str,
        adjustment: f64,
        account_name: Option<&str>,
        comment: Option<&str>,
    ) -> Result<Value> {
        self.invoke(
            "adjustUserAccountBalanceByGroup",
            vec![
                token.into(),
                account_name.into(),
                group.into(),
                adjustment.into(),
                comment.into(),
            ],
        )
    }

    /// Adjust the balance of every user in a group, but never increase a
    /// balance beyond `limit`.
    ///
    /// The remote procedure orders the trailing parameters adjustment,
    /// group, comment, limit; the parameter list below is in wire order.
    pub fn adjust_user_account_balance_by_group_up_to(
        &mut self,
        token: &str,
        account_name: Option<&str>,
        adjustment: f64,
        comment: Option<&str>,
        group: &str,
        limit: i32,
    ) -> Result<Value> {
        self.invoke(
            "adjustUserAccountBalanceByGroupUpTo",
            vec![
                token.into(),
                account_name.into(),
                adjustment.into(),
                group.into(),
                comment.into(),
                limit.into(),
            ],
        )
    }

    /// Set the balance of every member of a group to the given value.
    pub fn set_user_account_balance_by_group(
        &mut self,
        token: &str,
        group: &str,
        balance: f64,
        comment: Option<&str>,
        account_name: Option<&str>,
    ) -> Result<Value> {
        self.invoke(
            "setUserAccountBalanceByGroup",
            vec![
                token.into(),
                group.into(),
                balance.into(),
                comment.into(),
                account_name.into(),
            ],
        )
    }
}
