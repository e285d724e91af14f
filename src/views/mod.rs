//! 服务端渲染的 HTML 页面（配合 htmx 与 Bulma）

pub mod html;
pub mod page;
pub mod row;

pub use page::{IndexPage, render_index_page};
pub use row::evaluation_row;
