use std::borrow::Cow;

use reedline::{
    Emacs, Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus, Reedline,
    Signal, default_emacs_keybindings,
};

pub struct Editor {
    editor: Reedline,
    prompt: ArithPrompt,
}

impl Default for Editor {
    fn default() -> Self {
        let edit_mode = Emacs::new(default_emacs_keybindings());
        let editor = Reedline::create().with_edit_mode(Box::new(edit_mode));

        Self {
            editor,
            prompt: ArithPrompt,
        }
    }
}

pub enum EditorRead {
    Line(String),
    Skip,
    Quit,
}

impl Editor {
    pub fn read(&mut self) -> std::io::Result<EditorRead> {
        match self.editor.read_line(&self.prompt)? {
            Signal::Success(input) if input.trim().is_empty() => Ok(EditorRead::Skip),
            Signal::Success(input) => Ok(EditorRead::Line(input)),
            Signal::CtrlC | Signal::CtrlD => Ok(EditorRead::Quit),
        }
    }
}

pub struct ArithPrompt;

impl Prompt for ArithPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed("arith> ")
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("...    ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };

        Cow::Owned(format!("({prefix}search: {}) ", history_search.term))
    }
}
