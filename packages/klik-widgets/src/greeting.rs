use klik_core::{Component, NodeId, VDomArena, el};
use serde::{Deserialize, Serialize};

/// The one name that gets the employee greeting. A literal, case-insensitive
/// match; not a role lookup.
const EMPLOYEE_NAME: &str = "Bosku";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingProps {
    pub name: Option<String>,
}

/// Pure mapping from an optional name to the greeting line.
pub fn greeting_text(name: Option<&str>) -> String {
    match name {
        None | Some("") => "Hai pengguna".to_string(),
        Some(n) if n.eq_ignore_ascii_case(EMPLOYEE_NAME) => "Hai karyawan".to_string(),
        Some(n) => format!("Hai {}", n.to_lowercase()),
    }
}

/// Stateless greeting label. Re-evaluated on every render from its props.
pub struct Greeting {
    props: GreetingProps,
}

impl Greeting {
    pub fn new(props: GreetingProps) -> Self {
        Self { props }
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self::new(GreetingProps {
            name: Some(name.into()),
        })
    }

    pub fn anonymous() -> Self {
        Self::new(GreetingProps::default())
    }
}

impl Component for Greeting {
    fn view(&self, arena: &mut VDomArena) -> NodeId {
        el("p")
            .test_id("greeting")
            .text(greeting_text(self.props.name.as_deref()))
            .build(arena)
    }
}
