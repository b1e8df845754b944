//! Command execution against one theme store
//!
//! A session plays the role of the application shell: it owns the store,
//! routes commands into the mutation API and republishes the stylesheet after
//! every change.

use anyhow::{Context, Result};
use clap::{Subcommand, ValueEnum};
use folio_theme::{
    BackgroundType, ColorScheme, CssVariables, FontFamily, Preset, PrimaryColor, SurfaceColor,
    TextSize, ThemeStore,
};
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the active configuration
    Show,
    /// Print the published stylesheet
    Css,
    /// List every selectable value
    Presets,
    /// Change one field
    Set {
        field: Field,
        /// Id, display name or value from the field's catalog
        #[arg(required = true, num_args = 1..)]
        value: Vec<String>,
    },
    /// Step back one change
    Undo,
    /// Step forward one change
    Redo,
    /// Clear stored state and return to defaults
    Reset,
    /// Show or change the light/dark scheme
    Scheme { action: Option<SchemeAction> },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Primary,
    Surface,
    Font,
    TextSize,
    Background,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeAction {
    Toggle,
    Light,
    Dark,
}

pub struct Session {
    store: ThemeStore,
    stylesheet: Option<PathBuf>,
}

impl Session {
    pub fn new(store: ThemeStore, stylesheet: Option<PathBuf>) -> Self {
        Self { store, stylesheet }
    }

    pub fn store(&self) -> &ThemeStore {
        &self.store
    }

    /// Run one command and return the text to print
    pub fn execute(&mut self, command: &Command) -> Result<String> {
        let output = match command {
            Command::Show => self.describe(),
            Command::Css => self.stylesheet_text(),
            Command::Presets => presets_listing(),
            Command::Set { field, value } => {
                let value = value.join(" ");
                let changed = self.set(*field, &value)?;
                self.publish()?;
                if changed {
                    self.describe()
                } else {
                    "unchanged\n".to_string()
                }
            }
            Command::Undo => {
                if self.store.undo() {
                    self.publish()?;
                    self.describe()
                } else {
                    "nothing to undo\n".to_string()
                }
            }
            Command::Redo => {
                if self.store.redo() {
                    self.publish()?;
                    self.describe()
                } else {
                    "nothing to redo\n".to_string()
                }
            }
            Command::Reset => {
                self.store.reset();
                self.publish()?;
                self.describe()
            }
            Command::Scheme { action } => {
                match action {
                    Some(SchemeAction::Toggle) => self.store.toggle_scheme(),
                    Some(SchemeAction::Light) => {
                        self.store.set_scheme(ColorScheme::Light);
                    }
                    Some(SchemeAction::Dark) => {
                        self.store.set_scheme(ColorScheme::Dark);
                    }
                    None => {}
                }
                if action.is_some() {
                    self.publish()?;
                }
                format!("{}\n", self.store.scheme())
            }
        };
        Ok(output)
    }

    fn set(&mut self, field: Field, value: &str) -> Result<bool> {
        let changed = match field {
            Field::Primary => self.store.set_primary_color_str(value)?,
            Field::Surface => self.store.set_surface_color_str(value)?,
            Field::Font => self.store.set_font_family_str(value)?,
            Field::TextSize => {
                let size: TextSize = value.parse()?;
                self.store.set_text_size(size)
            }
            Field::Background => self.store.set_background_type_str(value)?,
        };
        Ok(changed)
    }

    fn stylesheet_text(&self) -> String {
        let mut scope = CssVariables::new();
        self.store.apply_to(&mut scope);
        scope.to_stylesheet()
    }

    /// Rewrite the configured stylesheet, if any
    pub fn publish(&self) -> Result<()> {
        let Some(path) = &self.stylesheet else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, self.stylesheet_text())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!("published stylesheet to {}", path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        let config = self.store.config();
        let history = self.store.history();
        let mut out = String::new();
        let _ = writeln!(out, "primary     {}", config.primary_color);
        let _ = writeln!(out, "surface     {}", config.surface_color);
        let _ = writeln!(out, "font        {}", config.font_family);
        let _ = writeln!(
            out,
            "text size   {} ({})",
            config.text_size,
            config.text_size.scale()
        );
        let _ = writeln!(out, "background  {}", config.background_type);
        let _ = writeln!(out, "scheme      {}", self.store.scheme());
        let _ = writeln!(
            out,
            "history     {}/{}",
            history.cursor() + 1,
            history.len()
        );
        out
    }
}

fn presets_listing() -> String {
    let mut out = String::new();

    let _ = writeln!(out, "primary:");
    for p in PrimaryColor::all() {
        let _ = writeln!(out, "  {:<12} {}", p.id(), p.color());
    }
    let _ = writeln!(out, "surface:");
    for p in SurfaceColor::all() {
        let _ = writeln!(out, "  {:<12} {} #{:06x}", p.id(), p.color(), p.preview_hex());
    }
    let _ = writeln!(out, "font:");
    for p in FontFamily::all() {
        let _ = writeln!(out, "  {:<12} {}", p.id(), p.stack());
    }
    let _ = writeln!(out, "text-size:");
    for p in TextSize::all() {
        let _ = writeln!(out, "  {:<12} {}", p.id(), p.scale());
    }
    let _ = writeln!(out, "background:");
    for p in BackgroundType::all() {
        let _ = writeln!(out, "  {:<12} {}", p.id(), p.display_name());
    }
    out
}
