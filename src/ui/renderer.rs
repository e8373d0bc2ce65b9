//! Plain-text renderer.
//!
//! Writes one line per visual element:
//!
//! ```text
//! [search] boots                         (placeholder when empty)
//! [Filters: 2]                           (omitted when hidden, "disabled" suffix)
//! 3 results | No matching results found.
//! [More] | [More…]                       (busy while loading)
//! ── dialog ──                           (only while open)
//! ```

use crate::app::SearchPanel;
use crate::ui::viewmodel::{DialogView, PanelViewModel};
use std::io::{self, Write};

/// Renders the panel's current view model.
///
/// # Errors
///
/// Propagates write errors from `out`.
///
/// # Example
///
/// ```rust
/// use searchpanel::app::SearchPanel;
/// use searchpanel::domain::Labels;
/// use searchpanel::ui::render;
///
/// let panel = SearchPanel::new(Labels::default());
/// let mut out = Vec::new();
/// render(&panel, &mut out)?;
///
/// assert!(String::from_utf8_lossy(&out).contains("No matching results found."));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render<W: Write>(panel: &SearchPanel, out: &mut W) -> io::Result<()> {
    render_viewmodel(&panel.compute_viewmodel(), out)
}

/// Renders a pre-computed view model.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_viewmodel<W: Write>(vm: &PanelViewModel, out: &mut W) -> io::Result<()> {
    let search = &vm.search_bar;
    if search.query.is_empty() {
        writeln!(out, "[{}] {}", search.icon, search.placeholder)?;
    } else {
        writeln!(out, "[{}] {}", search.icon, search.query)?;
    }

    let button = &vm.filter_button;
    if !button.hidden {
        let suffix = if button.disabled { " (disabled)" } else { "" };
        writeln!(out, "[Filters: {}]{suffix}", button.selected_count)?;
    }

    if vm.show_results {
        writeln!(out, "{} results", vm.result_count)?;
    }
    if let Some(text) = &vm.no_results {
        writeln!(out, "{text}")?;
    }

    if let Some(more) = &vm.more_button {
        let busy = if more.busy { "…" } else { "" };
        writeln!(out, "[{}{busy}]", more.label)?;
    }

    if let Some(dialog) = &vm.dialog {
        render_dialog(dialog, out)?;
    }

    Ok(())
}

fn render_dialog<W: Write>(dialog: &DialogView, out: &mut W) -> io::Result<()> {
    writeln!(out, "── dialog ──")?;

    match dialog {
        DialogView::Mounting => writeln!(out, "  (opening)"),
        DialogView::FilterList {
            rows,
            has_selection,
            reset_label,
            save_label,
        } => {
            for row in rows {
                writeln!(out, "  {} ({}): {}", row.name, row.id, row.summary)?;
            }
            if *has_selection {
                writeln!(out, "  [{reset_label}] [{save_label}]")
            } else {
                writeln!(out, "  [{save_label}]")
            }
        }
        DialogView::ValueList { filter_name, values } => {
            writeln!(out, "  {filter_name}")?;
            for value in values {
                let mark = if value.selected { 'x' } else { ' ' };
                writeln!(out, "  [{mark}] {} ({})", value.name, value.id)?;
            }
            Ok(())
        }
    }
}
