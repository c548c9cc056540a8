use super::*;

#[test]
fn logout_banner_text_is_fixed() {
    assert_eq!(GOODBYE_MESSAGE, "Goodbye!");
}

#[test]
fn nav_links_carry_the_screen_ids() {
    assert_eq!(NAV_LINKS[0], ("loginScreen", "/", "Login"));
    assert_eq!(NAV_LINKS[1], ("articlesScreen", "/articles", "Articles"));
}

#[test]
fn nav_links_target_the_two_routes() {
    let hrefs: Vec<&str> = NAV_LINKS.iter().map(|(_, href, _)| *href).collect();
    assert_eq!(hrefs, ["/", "/articles"]);
}
