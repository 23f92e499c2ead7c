pub mod banner;
pub mod board_controls;
pub mod board_grid;
pub mod button;
pub mod find_board_modal;
pub mod modal;
pub mod save_board_modal;
pub mod template_modal;
pub mod tile_cell;
pub mod tile_editor;
pub mod username_panel;
pub mod wiki_search;

pub use banner::BannerView;
pub use board_controls::BoardControls;
pub use board_grid::BoardGrid;
pub use button::Button;
pub use find_board_modal::FindBoardModal;
pub use modal::Modal;
pub use save_board_modal::SaveBoardModal;
pub use template_modal::TemplateModal;
pub use tile_cell::TileCell;
pub use tile_editor::TileEditor;
pub use username_panel::UsernamePanel;
pub use wiki_search::WikiSearch;
