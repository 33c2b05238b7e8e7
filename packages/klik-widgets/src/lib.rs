pub mod alert_button;
pub mod counter;
pub mod greeting;

pub use alert_button::{AlertButton, AlertButtonProps};
pub use counter::Counter;
pub use greeting::{Greeting, GreetingProps, greeting_text};
