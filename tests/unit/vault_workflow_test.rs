//! End-to-end exercise of a vault session: add, search, filter, edit,
//! delete and reset, the way the interactive menu drives it.

use rstest::{fixture, rstest};
use rust_passkeeper::core::validation::ValidationError;
use rust_passkeeper::core::vault::ACCOUNT_NOT_FOUND;
use rust_passkeeper::generators::PasswordGenerator;
use rust_passkeeper::models::{AccountForm, Category, GeneratorOptions, SortBy, SortOptions, SortOrder};
use rust_passkeeper::strength::calculate_password_strength;
use rust_passkeeper::{Vault, VaultAction, VaultError};
use uuid::Uuid;

fn form(website: &str, username: &str, category: Category) -> AccountForm {
    AccountForm {
        website: website.to_string(),
        username: username.to_string(),
        password: PasswordGenerator::new().generate_password(&GeneratorOptions::default()),
        category,
        notes: None,
    }
}

#[fixture]
fn vault() -> Vault {
    let mut vault = Vault::new();
    vault.create_account(form("https://vk.com", "ivan", Category::Social)).unwrap();
    vault.create_account(form("https://mail.yandex.ru", "ivan@yandex.ru", Category::Email)).unwrap();
    vault.create_account(form("https://online.sberbank.ru", "ivan.petrov", Category::Banking)).unwrap();
    vault.create_account(form("https://jira.company.com", "ipetrov", Category::Work)).unwrap();
    vault
}

#[rstest]
fn generated_passwords_are_stored_as_given(vault: Vault) {
    for account in vault.accounts() {
        assert_eq!(account.password.len(), 16);
        assert!(calculate_password_strength(&account.password).score > 0);
    }
}

#[rstest]
#[case("ivan", None, 3)]
#[case("IVAN", Some(Category::Email), 1)]
#[case("petrov", None, 2)]
#[case("", Some(Category::Work), 1)]
#[case("nobody", None, 0)]
fn search_and_filter(
    mut vault: Vault,
    #[case] query: &str,
    #[case] category: Option<Category>,
    #[case] expected: usize,
) {
    vault.dispatch(VaultAction::SetSearchQuery(query.to_string())).unwrap();
    vault.dispatch(VaultAction::SetSelectedCategory(category)).unwrap();
    assert_eq!(vault.filtered_count(), expected);
    assert_eq!(vault.no_results_found(), expected == 0);
}

#[rstest]
fn edit_then_delete(mut vault: Vault) {
    let target = vault
        .sorted(SortOptions { sort_by: SortBy::Username, sort_order: SortOrder::Asc })
        .first()
        .map(|a| a.id)
        .unwrap();

    let mut changed = vault.account_by_id(target).unwrap().to_form();
    changed.notes = Some("rotated".to_string());
    vault.edit_account(target, changed).unwrap();
    assert_eq!(vault.account_by_id(target).unwrap().notes.as_deref(), Some("rotated"));

    assert!(vault.delete_account(target));
    assert!(vault.account_by_id(target).is_none());
    assert_eq!(vault.total_count(), 3);
}

#[rstest]
fn invalid_edit_leaves_account_untouched(mut vault: Vault) {
    let target = vault.accounts()[0].clone();
    let mut bad = target.to_form();
    bad.password = "short".to_string();

    match vault.edit_account(target.id, bad) {
        Err(VaultError::Validation(errors)) => {
            assert_eq!(errors.0, vec![ValidationError::TooShort { field: "password", min: 8 }]);
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
    assert_eq!(vault.account_by_id(target.id), Some(&target));
}

#[rstest]
fn unknown_ids(mut vault: Vault) {
    let ghost = Uuid::new_v4();
    assert!(!vault.delete_account(ghost));
    assert!(vault.error().is_none());

    let err = vault.edit_account(ghost, form("https://example.com", "nobody", Category::Other)).unwrap_err();
    assert!(matches!(err, VaultError::NotFound(id) if id == ghost));
    assert_eq!(vault.error(), Some(ACCOUNT_NOT_FOUND));
}

#[rstest]
fn reset_clears_everything(mut vault: Vault) {
    vault.dispatch(VaultAction::SetSearchQuery("ivan".into())).unwrap();
    vault.dispatch(VaultAction::SetError(Some("boom".into()))).unwrap();
    vault.dispatch(VaultAction::Reset).unwrap();

    assert!(vault.is_empty());
    assert!(!vault.has_active_filters());
    assert!(vault.error().is_none());
}
