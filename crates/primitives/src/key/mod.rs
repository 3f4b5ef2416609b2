mod modifiers;

pub use modifiers::Modifiers;
