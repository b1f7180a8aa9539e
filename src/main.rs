mod cli;
mod settings;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use multipick::PickerUi;
use settings::ResolvedConfig;

fn main() -> Result<()> {
    let cli = parse_cli();

    if cli.list_themes {
        for name in multipick::ui::theme::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    run_picker(cli.output, resolved)
}

/// Run the interactive picker and print the outcome in the chosen format.
fn run_picker(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
    let picker = build_picker(settings);
    let outcome = picker.run()?;

    match format {
        OutputFormat::Plain => print_plain(&outcome),
        OutputFormat::Json => print_json(&outcome)?,
    }

    Ok(())
}

/// Translate resolved configuration into a configured [`PickerUi`].
fn build_picker(settings: ResolvedConfig) -> PickerUi {
    let ResolvedConfig {
        url,
        title,
        placeholder,
        initial_query,
        theme,
        close_on_select,
    } = settings;

    let mut picker = PickerUi::remote(url)
        .with_initial_query(initial_query)
        .close_on_select(close_on_select);
    if let Some(title) = title {
        picker = picker.with_input_title(title);
    }
    if let Some(placeholder) = placeholder {
        picker = picker.with_placeholder(placeholder);
    }
    if let Some(theme) = theme {
        picker = picker.with_theme_name(&theme);
    }
    picker
}
