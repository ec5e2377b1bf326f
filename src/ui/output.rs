//! Output functions for list/get results and config actions

use super::context::UiContext;
use console::style;

/// Width of the key column in `field`
const FIELD_WIDTH: usize = 12;

/// Title line above a result table or detail view
pub fn heading(ctx: &UiContext, title: &str) {
    if ctx.use_fancy_output() {
        cliclack::intro(style(title).cyan().bold()).ok();
    } else {
        println!("{}", style(title).cyan().bold());
        println!();
    }
}

/// Report a query that matched nothing, naming where it looked
pub fn empty(ctx: &UiContext, noun: &str, scope: &str) {
    let message = format!("No {} found {}", noun, scope);
    if ctx.use_fancy_output() {
        cliclack::log::info(message).ok();
    } else {
        println!("  {} {}", style("[INFO]").cyan(), message);
    }
}

/// Footer under a result table
pub fn total(ctx: &UiContext, count: usize, noun: &str) {
    let message = format!("{} {}(s)", count, noun);
    if ctx.use_fancy_output() {
        cliclack::outro(style(message).dim()).ok();
    } else {
        println!();
        println!("{}", message);
    }
}

/// One `key: value` row of a detail view, keys aligned
pub fn field(ctx: &UiContext, key: &str, value: &str) {
    let key = format!("{:<width$}", key, width = FIELD_WIDTH);
    if ctx.use_fancy_output() {
        println!("  {} {}", style(key).dim(), value);
    } else {
        println!("  {} {}", key, value);
    }
}

/// A file was written
pub fn saved(ctx: &UiContext, what: &str, path: &str) {
    if ctx.use_fancy_output() {
        cliclack::log::success(format!("{} ({})", what, style(path).dim())).ok();
    } else {
        println!("  {} {} ({})", style("[OK]").green(), what, path);
    }
}

/// An action was skipped; `hint` says how to force it
pub fn skipped(ctx: &UiContext, what: &str, hint: &str) {
    if ctx.use_fancy_output() {
        cliclack::log::warning(format!("{} - {}", what, style(hint).dim())).ok();
    } else {
        println!("  {} {} - {}", style("[SKIP]").yellow(), what, hint);
    }
}
