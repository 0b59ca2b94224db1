//! The Clipmaster window
//!
//! Maps UI events onto the clippings use case and decides what the
//! session should show next.

use crate::application::ports::{Clipboard, Notifier};
use crate::application::ClippingsUseCase;
use crate::domain::clipping::{Clipping, ClippingId};

use super::events::UiEvent;
use super::view::WindowView;

/// What the session should do after an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The window changed; render it again
    Redraw,
    ShowJson,
    ShowHelp,
    Success(String),
    Warning(String),
    /// Nothing changed and nothing to say
    Ignored,
    Close,
}

/// Single application window holding the clipping list
pub struct Window<C, N>
where
    C: Clipboard,
    N: Notifier,
{
    clippings: ClippingsUseCase<C, N>,
    dev_tools_open: bool,
}

impl<C, N> Window<C, N>
where
    C: Clipboard,
    N: Notifier,
{
    /// Open a window; developer tools start closed
    pub fn new(clippings: ClippingsUseCase<C, N>) -> Self {
        Self {
            clippings,
            dev_tools_open: false,
        }
    }

    pub fn dev_tools_open(&self) -> bool {
        self.dev_tools_open
    }

    /// Current view of the window
    pub fn view(&self) -> WindowView {
        WindowView::build(self.clippings.clippings(), self.dev_tools_open)
    }

    /// Handle one UI event
    pub async fn dispatch(&mut self, event: UiEvent) -> Reply {
        match event {
            UiEvent::AddClicked => match self.clippings.on_add_clicked().await {
                Ok(_) => Reply::Redraw,
                Err(e) => Reply::Warning(e.to_string()),
            },
            UiEvent::RemoveClicked(position) => match self.id_at(position) {
                Some(id) => {
                    self.clippings.on_remove_clicked(id);
                    Reply::Redraw
                }
                None => Reply::Warning(no_clipping_message(position)),
            },
            UiEvent::CopyClicked(position) => {
                let Some(id) = self.id_at(position) else {
                    return Reply::Warning(no_clipping_message(position));
                };
                match self.clippings.on_copy_clicked(id).await {
                    Ok(Some(clipping)) => Reply::Success(copied_message(position, &clipping)),
                    Ok(None) => Reply::Ignored,
                    Err(e) => Reply::Warning(e.to_string()),
                }
            }
            UiEvent::Render => Reply::Redraw,
            UiEvent::Json => Reply::ShowJson,
            UiEvent::ToggleDevTools => {
                self.dev_tools_open = !self.dev_tools_open;
                Reply::Redraw
            }
            UiEvent::Help => Reply::ShowHelp,
            UiEvent::Quit => Reply::Close,
        }
    }

    /// Resolve a 1-based display position to a clipping id
    fn id_at(&self, position: usize) -> Option<ClippingId> {
        let index = position.checked_sub(1)?;
        self.clippings.store().at(index).map(Clipping::id)
    }
}

fn no_clipping_message(position: usize) -> String {
    format!("No clipping number {}", position)
}

fn copied_message(position: usize, clipping: &Clipping) -> String {
    format!("Copied clipping {} to the clipboard: {}", position, clipping.preview(40))
}
