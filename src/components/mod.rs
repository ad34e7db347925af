pub mod post;
pub mod post_avatar;
pub mod post_info;
pub mod share_button;
