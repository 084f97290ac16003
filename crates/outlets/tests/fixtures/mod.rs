use wirehub_outlets::prelude::*;

/// Modal dialog controller declaring a mix of singular and plural outlets.
#[controller]
#[derive(Default)]
pub struct ModalController {
    #[outlet]
    pub confirm_outlet: Option<String>,
    #[outlets]
    pub item_outlets: Vec<String>,
}

/// Stands in for the parent side of registry isolation scenarios.
#[derive(Debug, Default)]
pub struct NavController;

impl Controller for NavController {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Stands in for the child side of registry isolation scenarios.
#[derive(Debug, Default)]
pub struct SidebarController;

impl Controller for SidebarController {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
