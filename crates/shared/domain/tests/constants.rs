use passport_domain::constants::{
    APP_NAME, COMPANY_NAME, DEBUG_INFO_ENABLED, ITEMS_PER_PAGE, VERSION,
};

#[test]
fn constants_match_literal_table() {
    assert_eq!(APP_NAME, "passport-server");
    assert_eq!(VERSION, "1.0.0");
    assert_eq!(COMPANY_NAME, "Infinity Organization");
    assert_eq!(ITEMS_PER_PAGE, 10);
    assert!(DEBUG_INFO_ENABLED);
}
