//! Method metadata table — category, sidebar order, and kind badge.
//!
//! The table is compiled in and owned by an explicitly constructed
//! `MetadataTable`; lookups are exact-match only, and unknown methods
//! resolve to a default entry rather than an error.

use crate::model::{Badge, Metadata};
use std::collections::HashMap;

use Badge::{Mutation, Post, Query, Utility};

/// (method name, category, order within category, badge)
const ENTRIES: &[(&str, &str, u32, Badge)] = &[
    // Authentication
    ("login", "Authentication", 1, Mutation),
    ("interactive_login", "Authentication", 2, Mutation),
    ("multi_factor_authenticate", "Authentication", 3, Mutation),
    ("save_session", "Authentication", 4, Utility),
    ("load_session", "Authentication", 5, Utility),
    ("delete_session", "Authentication", 6, Utility),
    // Accounts
    ("get_accounts", "Accounts", 1, Query),
    ("get_account_holdings", "Accounts", 2, Query),
    ("get_account_history", "Accounts", 3, Query),
    ("get_account_type_options", "Accounts", 4, Query),
    ("get_recent_account_balances", "Accounts", 5, Query),
    ("get_account_snapshots_by_type", "Accounts", 6, Query),
    ("get_aggregate_snapshots", "Accounts", 7, Query),
    ("create_manual_account", "Accounts", 8, Mutation),
    ("update_account", "Accounts", 9, Mutation),
    ("delete_account", "Accounts", 10, Mutation),
    ("request_accounts_refresh", "Accounts", 11, Mutation),
    ("is_accounts_refresh_complete", "Accounts", 12, Query),
    ("request_accounts_refresh_and_wait", "Accounts", 13, Mutation),
    // Transactions
    ("get_transactions", "Transactions", 1, Query),
    ("get_transaction_details", "Transactions", 2, Query),
    ("get_transaction_splits", "Transactions", 3, Query),
    ("get_transactions_summary", "Transactions", 4, Query),
    ("create_transaction", "Transactions", 5, Mutation),
    ("update_transaction", "Transactions", 6, Mutation),
    ("delete_transaction", "Transactions", 7, Mutation),
    ("update_transaction_splits", "Transactions", 8, Mutation),
    // Categories
    ("get_transaction_categories", "Categories", 1, Query),
    ("get_transaction_category_groups", "Categories", 2, Query),
    ("create_transaction_category", "Categories", 3, Mutation),
    ("update_transaction_category", "Categories", 4, Mutation),
    ("delete_transaction_category", "Categories", 5, Mutation),
    ("delete_transaction_categories", "Categories", 6, Mutation),
    ("update_category_group_settings", "Categories", 7, Mutation),
    ("enable_category_rollover", "Categories", 8, Mutation),
    ("get_category_rollover", "Categories", 9, Query),
    ("update_category_rollover", "Categories", 10, Mutation),
    // Tags
    ("get_transaction_tags", "Tags", 1, Query),
    ("create_transaction_tag", "Tags", 2, Mutation),
    ("set_transaction_tags", "Tags", 3, Mutation),
    // Budgets & goals
    ("get_budgets", "Budgets", 1, Query),
    ("set_budget_amount", "Budgets", 2, Mutation),
    ("update_flexible_budget", "Budgets", 3, Mutation),
    ("get_savings_goals", "Budgets", 4, Query),
    ("get_savings_goal_budgets", "Budgets", 5, Query),
    // Cash flow
    ("get_cashflow", "Analytics", 1, Query),
    ("get_cashflow_summary", "Analytics", 2, Query),
    ("get_aggregates", "Analytics", 3, Query),
    // Recurring
    ("get_recurring_transactions", "Recurring", 1, Query),
    ("get_all_recurring_transaction_items", "Recurring", 2, Query),
    // Institutions & user
    ("get_institutions", "Institutions", 1, Query),
    ("get_subscription_details", "User", 1, Query),
    ("get_user_profile", "User", 2, Query),
    // Utilities
    ("upload_account_balance_history", "Utilities", 1, Post),
    ("gql_call", "Utilities", 2, Utility),
];

/// Immutable name → metadata mapping.
pub struct MetadataTable {
    entries: HashMap<&'static str, Metadata>,
}

impl MetadataTable {
    /// Build the table from the compiled-in entries.
    pub fn builtin() -> Self {
        let entries = ENTRIES
            .iter()
            .map(|&(name, category, order, badge)| {
                (
                    name,
                    Metadata {
                        category,
                        order,
                        badge,
                    },
                )
            })
            .collect();
        MetadataTable { entries }
    }

    /// Exact-match lookup; unknown names get the default entry.
    pub fn resolve(&self, name: &str) -> Metadata {
        self.entries.get(name).cloned().unwrap_or_default()
    }
}
