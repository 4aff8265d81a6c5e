use crate::view::{Target, View};

/// Prints every write to stdout as `<target>: <content>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleView;

impl View for ConsoleView {
    fn set_text(&self, target: Target, text: &str) {
        println!("{target}: {text}");
    }

    fn set_html(&self, target: Target, html: &str) {
        println!("{target}: {html}");
    }
}
