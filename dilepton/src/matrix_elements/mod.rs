mod pp_to_llbar;

pub use self::pp_to_llbar::PpToLLbar;
