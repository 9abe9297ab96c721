/// Number-rendering helpers shared by the printer and the token listing.
pub mod num;
