pub mod fixtures;

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use wirehub_outlets::prelude::*;

    #[test]
    fn test_singular_registration_in_declaration_order() {
        let registry = OutletRegistry::new();
        let nav = NavController;

        registry.register_outlet(&nav, "firstOutlet").unwrap();
        registry.register_outlet(&nav, "secondOutlet").unwrap();

        assert_eq!(registry.outlets(&nav), ["first", "second"]);
    }

    #[test]
    fn test_plural_registration_in_declaration_order() {
        let registry = OutletRegistry::new();
        let nav = NavController;

        registry.register_outlets(&nav, "firstOutlets").unwrap();
        registry.register_outlets(&nav, "secondOutlets").unwrap();

        assert_eq!(registry.outlets(&nav), ["first", "second"]);
    }

    #[test]
    fn test_mixed_registrars_dedupe_by_key() {
        let registry = OutletRegistry::new();
        let nav = NavController;

        registry.register_outlet(&nav, "firstOutlet").unwrap();
        registry.register_outlet(&nav, "secondOutlet").unwrap();
        registry.register_outlets(&nav, "secondOutlets").unwrap();
        registry.register_outlets(&nav, "thirdOutlets").unwrap();

        assert_eq!(registry.outlets(&nav), ["first", "second", "third"]);
    }

    #[test]
    fn test_controller_types_have_independent_lists() {
        let registry = OutletRegistry::new();
        let nav = NavController;
        let sidebar = SidebarController;

        registry.register_outlet(&nav, "firstOutlet").unwrap();
        registry.register_outlet(&sidebar, "secondOutlet").unwrap();

        assert_eq!(registry.outlets(&nav), ["first"]);
        assert_eq!(registry.outlets(&sidebar), ["second"]);

        // Identity is the concrete type even through the trait object.
        let erased: Vec<&dyn Controller> = vec![&nav, &sidebar];
        assert_eq!(registry.outlets(erased[0]), ["first"]);
        assert_eq!(registry.outlets(erased[1]), ["second"]);
    }

    #[test]
    fn test_singular_violation_reports_exact_message() {
        let registry = OutletRegistry::new();
        let nav = NavController;
        registry.register_outlet(&nav, "existingOutlet").unwrap();

        let err = registry.register_outlet(&nav, "firstOutlettt").unwrap_err();
        assert!(matches!(err, OutletError::NamingConvention { .. }));
        assert_eq!(err.to_string(), "\"firstOutlettt\" must end with \"Outlet\"");

        // A rejected registration never mutates the existing list.
        assert_eq!(registry.outlets(&nav), ["existing"]);
    }

    #[test]
    fn test_plural_violation_reports_exact_message() {
        let registry = OutletRegistry::new();
        let nav = NavController;

        let err = registry.register_outlets(&nav, "firstOutletsss").unwrap_err();
        assert_eq!(err.to_string(), "\"firstOutletsss\" must end with \"Outlets\"");
        assert!(registry.outlets(&nav).is_empty());
    }

    #[test]
    fn test_violation_context_attachment() {
        let registry = OutletRegistry::new();
        let nav = NavController;

        let err = registry
            .register_outlet(&nav, "broken")
            .context("wiring NavController")
            .unwrap_err();
        assert_eq!(err.to_string(), "\"broken\" must end with \"Outlet\" (wiring NavController)");
    }

    #[test]
    fn test_repeated_registration_is_idempotent() {
        let registry = OutletRegistry::new();
        let nav = NavController;

        registry.add_outlet(&nav, "first");
        registry.add_outlet(&nav, "second");
        registry.add_outlet(&nav, "first");

        assert_eq!(registry.outlets(&nav), ["first", "second"]);
    }

    #[test]
    fn test_property_name_equal_to_suffix_registers_empty_key() {
        let registry = OutletRegistry::new();
        let nav = NavController;

        registry.register_outlet(&nav, "Outlet").unwrap();

        assert_eq!(registry.outlets(&nav), [""]);
        assert!(registry.contains(&nav, ""));
    }

    #[test]
    fn test_typed_read_matches_instance_read() {
        let registry = OutletRegistry::new();
        let nav = NavController;

        registry.register_outlet(&nav, "menuOutlet").unwrap();

        assert_eq!(registry.outlets_of::<NavController>(), registry.outlets(&nav));
        assert!(registry.outlets_of::<SidebarController>().is_empty());
    }

    #[test]
    fn test_macro_declared_controller_wires_in_field_order() {
        let registry = OutletRegistry::new();
        let modal = ModalController::default();

        modal.wire_outlets(&registry).unwrap();
        assert_eq!(registry.outlets(&modal), ["confirm", "item"]);

        // Wiring twice never duplicates or reorders.
        modal.wire_outlets(&registry).unwrap();
        assert_eq!(registry.outlets(&modal), ["confirm", "item"]);
    }

    #[test]
    fn test_macro_and_manual_registrations_share_one_list() {
        let registry = OutletRegistry::new();
        let modal = ModalController::default();

        registry.register_outlet(&modal, "confirmOutlet").unwrap();
        modal.wire_outlets(&registry).unwrap();

        assert_eq!(registry.outlets(&modal), ["confirm", "item"]);
    }

    #[test]
    fn test_explicit_property_name_override() {
        #[controller]
        struct LegacyController {
            #[outlet(name = "resultsPanelOutlet")]
            panel: Option<String>,
        }

        let registry = OutletRegistry::new();
        let legacy = LegacyController { panel: None };

        legacy.wire_outlets(&registry).unwrap();
        assert_eq!(registry.outlets(&legacy), ["resultsPanel"]);
    }

    #[test]
    fn test_macro_violation_aborts_wiring() {
        #[controller]
        struct BrokenController {
            #[outlet(name = "misnamed")]
            first: Option<String>,
            #[outlet]
            second_outlet: Option<String>,
        }

        let registry = OutletRegistry::new();
        let broken = BrokenController { first: None, second_outlet: None };

        let err = broken.wire_outlets(&registry).unwrap_err();
        assert_eq!(err.to_string(), "\"misnamed\" must end with \"Outlet\"");
        assert!(registry.outlets(&broken).is_empty());
    }

    #[test]
    fn test_clear_drops_every_list() {
        let registry = OutletRegistry::new();
        let nav = NavController;
        let sidebar = SidebarController;

        registry.register_outlet(&nav, "firstOutlet").unwrap();
        registry.register_outlets(&sidebar, "secondOutlets").unwrap();

        assert_eq!(registry.clear(), 2);
        assert!(registry.outlets(&nav).is_empty());
        assert!(registry.outlets(&sidebar).is_empty());
        assert_eq!(registry.clear(), 0);
    }

    #[test]
    fn test_concurrent_registration_loses_nothing() {
        let registry = OutletRegistry::new();

        std::thread::scope(|scope| {
            for chunk in 0..4u32 {
                let registry = registry.clone();
                scope.spawn(move || {
                    let nav = NavController;
                    for i in 0..25u32 {
                        registry.add_outlet(&nav, format!("key{}", chunk * 25 + i));
                    }
                    registry.add_outlet(&nav, "shared");
                });
            }
        });

        let keys = registry.outlets_of::<NavController>();
        assert_eq!(keys.len(), 101, "100 distinct keys plus one shared");
        assert_eq!(keys.iter().filter(|k| k.as_str() == "shared").count(), 1);
    }
}
