//! Page components.

mod cart;
mod home;
mod product_detail;
mod sign_in;
mod sign_up;
mod wishlist;

pub use cart::CartPage;
pub use home::HomePage;
pub use product_detail::ProductDetailPage;
pub use sign_in::SignInPage;
pub use sign_up::SignUpPage;
pub use wishlist::WishlistPage;
