//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks, side files
//! - Red: errors
//! - Yellow: warnings, follow-up reminders
//! - Cyan: headers, paths, hints
//! - Blue: template comments
//! - Dimmed: commands about to run

use std::path::Path;

use console::style;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a run header.
///
/// Example: `--- SKYLAB Secret Deployer: app.env ---`
pub fn header(title: &str) {
    let line = format!("--- {} ---", title);
    if colors_enabled() {
        println!("{}", style(line).cyan());
    } else {
        println!("{}", line);
    }
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ secrets saved to /srv/app/app.env`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ template not found at secrets/app.env`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
pub fn warn(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("⚠").yellow(), msg);
    } else {
        println!("⚠ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ run 'update-nix' to apply changes`
pub fn hint(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        println!("→ {}", msg);
    }
}

/// Echo a template comment (blue).
pub fn comment(text: &str) {
    if colors_enabled() {
        println!("{}", style(text).blue());
    } else {
        println!("{}", text);
    }
}

/// Announce a command before it runs (dimmed).
///
/// Example: `Executing: openssl rand -hex 32`
pub fn executing(expression: &str) {
    let line = format!("Executing: {}", expression);
    if colors_enabled() {
        println!("{}", style(line).dim());
    } else {
        println!("{}", line);
    }
}

/// Announce a side file (green).
///
/// Example: `Saving TLS_KEY to side-file: /srv/app/tls_key.secret`
pub fn side_file(key: &str, path: &Path) {
    let line = format!("Saving {} to side-file: {}", key, path.display());
    if colors_enabled() {
        println!("{}", style(line).green());
    } else {
        println!("{}", line);
    }
}

/// Format a path in cyan for inline use.
pub fn path(p: &Path) -> String {
    let p = p.display().to_string();
    if colors_enabled() {
        style(p).cyan().to_string()
    } else {
        p
    }
}
