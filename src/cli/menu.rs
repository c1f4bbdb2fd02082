// src/cli/menu.rs
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use console::style;
use inquire::{Confirm, InquireError, Password, Select, Text};
use uuid::Uuid;

use crate::cli::handlers::{level_color, styled_strength};
use crate::core::config::Config;
use crate::core::vault::{Vault, VaultAction, VaultError};
use crate::generators::PasswordGenerator;
use crate::models::{
    Account, AccountForm, Category, GeneratorOptions, Locale, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};
use crate::strength::{calculate_password_strength_localized, password_recommendations};
use crate::utils::{format_time_ago, mask_password, truncate_string};

type PromptResult<T> = std::result::Result<T, InquireError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Add,
    View,
    Search,
    Filter,
    Edit,
    Delete,
    Generate,
    Strength,
    Overview,
    ClearFilters,
    Exit,
}

impl MenuItem {
    const ALL: [MenuItem; 11] = [
        MenuItem::Add,
        MenuItem::View,
        MenuItem::Search,
        MenuItem::Filter,
        MenuItem::Edit,
        MenuItem::Delete,
        MenuItem::Generate,
        MenuItem::Strength,
        MenuItem::Overview,
        MenuItem::ClearFilters,
        MenuItem::Exit,
    ];
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuItem::Add => "➕  Add an account",
            MenuItem::View => "📋  View accounts",
            MenuItem::Search => "🔍  Search accounts",
            MenuItem::Filter => "🗂️  Filter by category",
            MenuItem::Edit => "✏️  Edit an account",
            MenuItem::Delete => "🗑️  Delete an account",
            MenuItem::Generate => "🔐  Generate secure password",
            MenuItem::Strength => "📊  Check password strength",
            MenuItem::Overview => "📈  Category overview",
            MenuItem::ClearFilters => "🧹  Clear filters",
            MenuItem::Exit => "❌  Exit",
        };
        f.write_str(label)
    }
}

/// Select-list entry that remembers which account it stands for.
struct AccountChoice {
    id: Uuid,
    label: String,
}

impl fmt::Display for AccountChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

struct CategoryChoice {
    category: Option<Category>,
    label: String,
}

impl fmt::Display for CategoryChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

struct Session {
    vault: Vault,
    config: Config,
    locale: Locale,
    generator: PasswordGenerator,
}

pub fn run_cli_menu(config: Config, locale: Locale, should_exit: Arc<AtomicBool>) -> anyhow::Result<()> {
    println!("🦀🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║          🦀 PASSKEEPER               ║");
    println!("╚══════════════════════════════════════╝");
    println!("Accounts live in memory and are gone when you exit.");

    let mut session = Session {
        vault: Vault::new(),
        config,
        locale,
        generator: PasswordGenerator::new(),
    };

    while !should_exit.load(Ordering::SeqCst) {
        let status = format!(
            "Choose an option ({} of {} accounts shown):",
            session.vault.filtered_count(),
            session.vault.total_count()
        );
        let selection = Select::new(&status, MenuItem::ALL.to_vec())
            .with_help_message("Use arrow keys to navigate, Enter to select, Esc to go back.")
            .with_page_size(MenuItem::ALL.len())
            .prompt_skippable();

        let item = match selection {
            Ok(Some(item)) => item,
            Ok(None) => continue,
            Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        if item == MenuItem::Exit {
            break;
        }

        match session.run(item) {
            Ok(()) => {}
            Err(InquireError::OperationCanceled) => println!("↩️  Cancelled"),
            Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        }
    }

    println!("👋 Shutting down PassKeeper...");
    log::info!("Menu closed with {} account(s) discarded", session.vault.total_count());
    session.vault.dispatch(VaultAction::Reset)?;
    Ok(())
}

impl Session {
    fn run(&mut self, item: MenuItem) -> PromptResult<()> {
        match item {
            MenuItem::Add => self.add_account(),
            MenuItem::View => self.view_accounts(),
            MenuItem::Search => self.search(),
            MenuItem::Filter => self.filter_by_category(),
            MenuItem::Edit => self.edit_account(),
            MenuItem::Delete => self.delete_account(),
            MenuItem::Generate => self.generate(),
            MenuItem::Strength => self.check_strength(),
            MenuItem::Overview => {
                self.overview();
                Ok(())
            }
            MenuItem::ClearFilters => {
                self.apply(VaultAction::ClearFilters);
                println!("✅ Filters cleared");
                Ok(())
            }
            MenuItem::Exit => Ok(()),
        }
    }

    fn apply(&mut self, action: VaultAction) {
        if let Err(e) = self.vault.dispatch(action) {
            println!("❌ {}", e);
        }
    }

    fn add_account(&mut self) -> PromptResult<()> {
        let form = self.prompt_form(None)?;
        match self.vault.create_account(form) {
            Ok(id) => {
                log::info!("Account {} added", id);
                println!("✅ Account added");
            }
            Err(e) => report_vault_error(&e),
        }
        Ok(())
    }

    fn edit_account(&mut self) -> PromptResult<()> {
        let Some(id) = self.choose_account("Select an account to edit:")? else {
            return Ok(());
        };
        let Some(current) = self.vault.account_by_id(id).map(Account::to_form) else {
            return Ok(());
        };

        let form = self.prompt_form(Some(&current))?;
        match self.vault.edit_account(id, form) {
            Ok(()) => println!("✅ Account updated"),
            Err(e) => report_vault_error(&e),
        }
        Ok(())
    }

    fn delete_account(&mut self) -> PromptResult<()> {
        let Some(id) = self.choose_account("Select an account to delete:")? else {
            return Ok(());
        };
        let website = self.vault.account_by_id(id).map(|a| a.website.clone()).unwrap_or_default();

        let confirmed = Confirm::new(&format!("Delete {}? This cannot be undone.", website))
            .with_default(false)
            .prompt()?;

        if confirmed && self.vault.delete_account(id) {
            log::info!("Account {} deleted", id);
            println!("🗑️  Account deleted");
        }
        Ok(())
    }

    fn view_accounts(&mut self) -> PromptResult<()> {
        if self.vault.is_empty() {
            println!("❗ No accounts stored yet.");
            return Ok(());
        }
        if self.vault.no_results_found() {
            println!("❗ No accounts match the current filters.");
            return Ok(());
        }

        println!();
        println!(
            "{:<32} {:<24} {:<14} {:<14} {}",
            style("Website").bold(),
            style("Username").bold(),
            style("Category").bold(),
            style("Password").bold(),
            style("Updated").bold()
        );
        for account in self.vault.sorted_by_date() {
            let strength = calculate_password_strength_localized(&account.password, self.locale);
            println!(
                "{:<32} {:<24} {:<14} {:<14} {}",
                truncate_string(&account.website, 32),
                truncate_string(&account.username, 24),
                account.category.label(self.locale),
                style(mask_password(&account.password)).fg(level_color(strength.level)),
                format_time_ago(account.updated_at)
            );
        }
        println!();

        let show = Confirm::new("Show details for one account?").with_default(false).prompt()?;
        if !show {
            return Ok(());
        }
        if let Some(id) = self.choose_account("Select an account:")? {
            if let Some(account) = self.vault.account_by_id(id) {
                print_details(account, self.locale);
            }
        }
        Ok(())
    }

    fn search(&mut self) -> PromptResult<()> {
        let query = Text::new("Search website or username (empty to clear):")
            .with_default(self.vault.search_query())
            .prompt()?;
        self.apply(VaultAction::SetSearchQuery(query));

        if self.vault.no_results_found() {
            println!("❗ Nothing found");
        } else {
            println!("🔍 {} account(s) match", self.vault.filtered_count());
        }
        Ok(())
    }

    fn filter_by_category(&mut self) -> PromptResult<()> {
        let mut choices = vec![CategoryChoice {
            category: None,
            label: format!("[All categories] ({})", self.vault.total_count()),
        }];
        choices.extend(self.vault.category_counts().into_iter().map(|c| CategoryChoice {
            category: Some(c.category),
            label: format!("{} ({})", c.category.label(self.locale), c.count),
        }));

        let choice = Select::new("Filter by category:", choices).prompt()?;
        self.apply(VaultAction::SetSelectedCategory(choice.category));
        println!("🗂️  {} account(s) shown", self.vault.filtered_count());
        Ok(())
    }

    fn overview(&self) {
        println!();
        for (category, shown, total) in overview_rows(&self.vault) {
            println!("{:<16} {} shown / {} total", category.label(self.locale), shown, total);
        }
        if self.vault.has_active_filters() {
            println!("(filters active: query {:?}, category {:?})", self.vault.search_query(), self.vault.selected_category());
        }
        println!();
    }

    fn generate(&mut self) -> PromptResult<()> {
        let options = self.prompt_generator_options()?;
        let password = self.generator.generate_password(&options);
        let strength = calculate_password_strength_localized(&password, self.locale);

        println!("\nGenerated Password: {}", style(&password).bold());
        println!("Strength: {}\n", styled_strength(&strength));

        let save = Confirm::new("Save it as a new account?").with_default(false).prompt()?;
        if save {
            let website = Text::new("Website URL:").prompt()?;
            let username = Text::new("Username or email:").prompt()?;
            let category = self.prompt_category(None)?;
            let notes = optional(Text::new("Notes (optional):").prompt()?);

            let form = AccountForm { website, username, password, category, notes };
            match self.vault.create_account(form) {
                Ok(_) => println!("✅ Account added"),
                Err(e) => report_vault_error(&e),
            }
        }
        Ok(())
    }

    fn check_strength(&mut self) -> PromptResult<()> {
        let password = Password::new("Password to check:")
            .with_display_mode(inquire::PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()?;
        print_strength(&password, self.locale);
        Ok(())
    }

    fn choose_account(&self, prompt: &str) -> PromptResult<Option<Uuid>> {
        let choices: Vec<AccountChoice> = self
            .vault
            .sorted_by_website()
            .into_iter()
            .map(|a| AccountChoice {
                id: a.id,
                label: format!("{} ({}) [{}]", a.website, a.username, a.category.label(self.locale)),
            })
            .collect();

        if choices.is_empty() {
            println!("❗ No accounts to choose from.");
            return Ok(None);
        }

        let choice = Select::new(prompt, choices).with_page_size(15).prompt_skippable()?;
        Ok(choice.map(|c| c.id))
    }

    fn prompt_category(&self, current: Option<Category>) -> PromptResult<Category> {
        let choices: Vec<CategoryChoice> = Category::ALL
            .iter()
            .map(|&c| CategoryChoice { category: Some(c), label: c.label(self.locale).to_string() })
            .collect();
        let start = current
            .and_then(|c| Category::ALL.iter().position(|&x| x == c))
            .unwrap_or(Category::ALL.len() - 1);

        let choice = Select::new("Category:", choices).with_starting_cursor(start).prompt()?;
        Ok(choice.category.unwrap_or(Category::Other))
    }

    fn prompt_generator_options(&self) -> PromptResult<GeneratorOptions> {
        let defaults = self.config.generator_options();
        let length = Text::new(&format!("Password length ({}-{}):", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH))
            .with_default(&defaults.length.to_string())
            .prompt()
            .and_then(|s| {
                s.trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|l| (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(l))
                    .ok_or_else(|| InquireError::Custom("Length must be a number between 8 and 64".into()))
            });
        let length = match length {
            Ok(length) => length,
            Err(InquireError::Custom(msg)) => {
                println!("❌ {}, using {}", msg, defaults.length);
                defaults.length
            }
            Err(e) => return Err(e),
        };

        let options = GeneratorOptions {
            length,
            include_uppercase: Confirm::new("Include uppercase letters?")
                .with_default(defaults.include_uppercase)
                .prompt()?,
            include_lowercase: Confirm::new("Include lowercase letters?")
                .with_default(defaults.include_lowercase)
                .prompt()?,
            include_numbers: Confirm::new("Include numbers?")
                .with_default(defaults.include_numbers)
                .prompt()?,
            include_symbols: Confirm::new("Include symbols?")
                .with_default(defaults.include_symbols)
                .prompt()?,
        };

        if !options.has_any_class() {
            println!("⚠️  No character type selected, using lowercase letters");
        }
        Ok(options)
    }

    fn prompt_form(&self, current: Option<&AccountForm>) -> PromptResult<AccountForm> {
        let website = Text::new("Website URL:")
            .with_default(current.map_or("https://", |f| f.website.as_str()))
            .prompt()?;
        let username = Text::new("Username or email:")
            .with_default(current.map_or("", |f| f.username.as_str()))
            .prompt()?;

        let keep_existing = match current {
            Some(_) => Confirm::new("Keep the current password?").with_default(true).prompt()?,
            None => false,
        };

        let password = match current {
            Some(form) if keep_existing => form.password.clone(),
            _ => {
                let generate = Confirm::new("Generate a secure password?").with_default(true).prompt()?;
                let password = if generate {
                    let options = self.prompt_generator_options()?;
                    let generated = self.generator.generate_password(&options);
                    println!("Generated Password: {}", style(&generated).bold());
                    generated
                } else {
                    Password::new("Password:")
                        .with_display_mode(inquire::PasswordDisplayMode::Masked)
                        .prompt()?
                };
                print_strength(&password, self.locale);
                password
            }
        };

        let category = self.prompt_category(current.map(|f| f.category))?;
        let notes = Text::new("Notes (optional):")
            .with_default(current.and_then(|f| f.notes.as_deref()).unwrap_or(""))
            .prompt()?;

        Ok(AccountForm { website, username, password, category, notes: optional(notes) })
    }
}

/// Per category: accounts passing the current filters, and all accounts.
fn overview_rows(vault: &Vault) -> Vec<(Category, usize, usize)> {
    let counts = vault.category_counts();
    vault
        .accounts_by_category()
        .into_iter()
        .map(|(category, accounts)| {
            let total = counts.iter().find(|c| c.category == category).map_or(0, |c| c.count);
            (category, accounts.len(), total)
        })
        .collect()
}

fn optional(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn report_vault_error(error: &VaultError) {
    match error {
        VaultError::Validation(errors) => {
            println!("❌ The account was not saved:");
            for e in errors.iter() {
                println!("   • {}", e);
            }
        }
        other => println!("❌ {}", other),
    }
}

fn print_strength(password: &str, locale: Locale) {
    let strength = calculate_password_strength_localized(password, locale);
    println!("Strength: {}", styled_strength(&strength));
    for advice in password_recommendations(password, locale) {
        println!("  • {}", advice);
    }
}

fn print_details(account: &Account, locale: Locale) {
    println!("\n🔐 Account Details");
    println!("Website: {}", account.website);
    println!("Username: {}", account.username);
    println!("Password: {}", account.password);
    println!("Category: {}", account.category.label(locale));
    if let Some(notes) = &account.notes {
        println!("Notes: {}", notes);
    }
    println!("Created: {}", account.created_at.format("%Y-%m-%d %H:%M"));
    println!("Last updated: {} ({})", account.updated_at.format("%Y-%m-%d %H:%M"), format_time_ago(account.updated_at));
    print_strength(&account.password, locale);
    println!();
}
