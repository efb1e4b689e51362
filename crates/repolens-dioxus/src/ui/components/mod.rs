pub mod block_view;
pub mod code_panel;
pub mod error_banner;
pub mod file_browser;
pub mod input_form;
pub mod loading_panel;
pub mod markdown_view;
pub mod result_view;
pub mod setup_screen;
pub mod source_chips;
pub mod text_line;

pub use block_view::BlockView;
pub use code_panel::CodePanel;
pub use error_banner::ErrorBanner;
pub use file_browser::FileBrowser;
pub use input_form::InputForm;
pub use loading_panel::LoadingPanel;
pub use markdown_view::MarkdownView;
pub use result_view::ResultView;
pub use setup_screen::SetupScreen;
pub use source_chips::SourceChips;
pub use text_line::TextLine;
