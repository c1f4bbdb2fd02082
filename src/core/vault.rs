// src/core/vault.rs
use std::cmp::Ordering;

use thiserror::Error;
use uuid::Uuid;

use crate::core::validation::{validate_account_form, ValidationErrors};
use crate::models::{Account, AccountForm, Category, CategoryCount, SortBy, SortOptions, SortOrder};

pub const ACCOUNT_NOT_FOUND: &str = "Account not found";

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("Account not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid account: {0}")]
    Validation(#[from] ValidationErrors),
}

pub type Result<T> = std::result::Result<T, VaultError>;

/// State changes the vault understands. Every mutation goes through
/// [`Vault::dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum VaultAction {
    AddPassword(Account),
    UpdatePassword(Account),
    DeletePassword(Uuid),
    SetSearchQuery(String),
    SetSelectedCategory(Option<Category>),
    SetLoading(bool),
    SetError(Option<String>),
    ClearFilters,
    Reset,
}

/// Session-scoped account list together with the current search and
/// category filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vault {
    accounts: Vec<Account>,
    selected_category: Option<Category>,
    search_query: String,
    loading: bool,
    error: Option<String>,
}

impl Vault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, action: VaultAction) -> Result<()> {
        log::trace!("dispatch {:?}", action);

        match action {
            VaultAction::AddPassword(account) => {
                log::debug!("Adding account {} ({})", account.id, account.website);
                self.accounts.push(account);
                self.error = None;
            }
            VaultAction::UpdatePassword(account) => {
                match self.accounts.iter_mut().find(|a| a.id == account.id) {
                    Some(existing) => {
                        log::debug!("Updating account {}", account.id);
                        *existing = account;
                        self.error = None;
                    }
                    None => {
                        log::warn!("Update for unknown account {}", account.id);
                        self.error = Some(ACCOUNT_NOT_FOUND.to_string());
                        return Err(VaultError::NotFound(account.id));
                    }
                }
            }
            VaultAction::DeletePassword(id) => {
                self.remove_account(id);
            }
            VaultAction::SetSearchQuery(query) => self.search_query = query,
            VaultAction::SetSelectedCategory(category) => self.selected_category = category,
            VaultAction::SetLoading(loading) => self.loading = loading,
            VaultAction::SetError(error) => self.error = error,
            VaultAction::ClearFilters => {
                self.search_query.clear();
                self.selected_category = None;
            }
            VaultAction::Reset => *self = Vault::default(),
        }

        Ok(())
    }

    /// Validate the form and store it as a new account.
    pub fn create_account(&mut self, form: AccountForm) -> Result<Uuid> {
        validate_account_form(&form)?;
        let account = Account::from_form(form);
        let id = account.id;
        self.dispatch(VaultAction::AddPassword(account))?;
        Ok(id)
    }

    /// Validate the form and apply it to an existing account.
    pub fn edit_account(&mut self, id: Uuid, form: AccountForm) -> Result<()> {
        validate_account_form(&form)?;
        let updated = match self.account_by_id(id) {
            Some(existing) => existing.with_form(form),
            None => {
                self.error = Some(ACCOUNT_NOT_FOUND.to_string());
                return Err(VaultError::NotFound(id));
            }
        };
        self.dispatch(VaultAction::UpdatePassword(updated))
    }

    pub fn delete_account(&mut self, id: Uuid) -> bool {
        self.remove_account(id)
    }

    fn remove_account(&mut self, id: Uuid) -> bool {
        let before = self.accounts.len();
        self.accounts.retain(|a| a.id != id);
        self.error = None;

        let removed = self.accounts.len() < before;
        if removed {
            log::debug!("Deleted account {}", id);
        }
        removed
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_category(&self) -> Option<Category> {
        self.selected_category
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Accounts matching the selected category and the search query
    /// (case-insensitive substring of website or username).
    pub fn filtered_accounts(&self) -> Vec<&Account> {
        let query = self.search_query.trim().to_lowercase();

        self.accounts
            .iter()
            .filter(|a| self.selected_category.map_or(true, |c| a.category == c))
            .filter(|a| {
                query.is_empty()
                    || a.website.to_lowercase().contains(&query)
                    || a.username.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Filtered accounts grouped per category; every category is present.
    pub fn accounts_by_category(&self) -> Vec<(Category, Vec<&Account>)> {
        let filtered = self.filtered_accounts();
        Category::ALL
            .iter()
            .map(|&category| {
                let members: Vec<&Account> = filtered.iter().copied().filter(|a| a.category == category).collect();
                (category, members)
            })
            .collect()
    }

    /// Per-category totals over all accounts, ignoring filters.
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        Category::ALL
            .iter()
            .map(|&category| CategoryCount {
                category,
                count: self.accounts.iter().filter(|a| a.category == category).count(),
            })
            .collect()
    }

    pub fn total_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered_accounts().len()
    }

    pub fn account_by_id(&self, id: Uuid) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search_query.trim().is_empty() || self.selected_category.is_some()
    }

    /// Newest first.
    pub fn sorted_by_date(&self) -> Vec<&Account> {
        self.sorted(SortOptions { sort_by: SortBy::CreatedAt, sort_order: SortOrder::Desc })
    }

    pub fn sorted_by_website(&self) -> Vec<&Account> {
        self.sorted(SortOptions { sort_by: SortBy::Website, sort_order: SortOrder::Asc })
    }

    pub fn sorted(&self, options: SortOptions) -> Vec<&Account> {
        let mut accounts = self.filtered_accounts();
        accounts.sort_by(|a, b| {
            let ordering = compare_by(a, b, options.sort_by);
            match options.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        accounts
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn no_results_found(&self) -> bool {
        self.has_active_filters() && self.filtered_count() == 0
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

fn compare_by(a: &Account, b: &Account, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Website => compare_text(&a.website, &b.website),
        SortBy::Username => compare_text(&a.username, &b.username),
        SortBy::CreatedAt => a.created_at.cmp(&b.created_at),
        SortBy::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        SortBy::Category => a.category.cmp(&b.category),
    }
}
