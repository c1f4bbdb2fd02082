//! Property-based tests for vault selectors.
//!
//! For arbitrary account lists and filters, the filtered view must obey
//! both filters and the per-category counts must add up.

use proptest::prelude::*;
use rust_passkeeper::models::{AccountForm, Category};
use rust_passkeeper::{Vault, VaultAction};

fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn form_strategy() -> impl Strategy<Value = AccountForm> {
    ("[a-z]{3,10}", "[a-zA-Z0-9]{3,12}", category_strategy()).prop_map(|(host, username, category)| AccountForm {
        website: format!("https://{host}.com"),
        username,
        password: "Corr3ct-Horse".to_string(),
        category,
        notes: None,
    })
}

fn vault_with(forms: Vec<AccountForm>) -> Vault {
    let mut vault = Vault::new();
    for form in forms {
        vault.create_account(form).expect("generated forms are valid");
    }
    vault
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn filtered_accounts_satisfy_both_filters(
        forms in prop::collection::vec(form_strategy(), 0..20),
        query in "[a-zA-Z]{0,3}",
        category in prop::option::of(category_strategy()),
    ) {
        let mut vault = vault_with(forms);
        vault.dispatch(VaultAction::SetSearchQuery(query.clone())).unwrap();
        vault.dispatch(VaultAction::SetSelectedCategory(category)).unwrap();

        let needle = query.to_lowercase();
        for account in vault.filtered_accounts() {
            if let Some(category) = category {
                prop_assert_eq!(account.category, category);
            }
            prop_assert!(
                account.website.to_lowercase().contains(&needle)
                    || account.username.to_lowercase().contains(&needle)
            );
        }

        let expected = vault
            .accounts()
            .iter()
            .filter(|a| category.map_or(true, |c| a.category == c))
            .filter(|a| a.website.to_lowercase().contains(&needle) || a.username.to_lowercase().contains(&needle))
            .count();
        prop_assert_eq!(vault.filtered_count(), expected);
        prop_assert_eq!(vault.no_results_found(), vault.has_active_filters() && expected == 0);
    }

    #[test]
    fn category_counts_sum_to_total(forms in prop::collection::vec(form_strategy(), 0..30)) {
        let vault = vault_with(forms);
        let counts = vault.category_counts();
        prop_assert_eq!(counts.len(), Category::ALL.len());
        prop_assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), vault.total_count());

        let grouped: usize = vault.accounts_by_category().iter().map(|(_, members)| members.len()).sum();
        prop_assert_eq!(grouped, vault.filtered_count());
    }

    #[test]
    fn website_sort_is_ordered(forms in prop::collection::vec(form_strategy(), 0..20)) {
        let vault = vault_with(forms);
        let sorted = vault.sorted_by_website();
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].website.to_lowercase() <= pair[1].website.to_lowercase());
        }
    }
}
