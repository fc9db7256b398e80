#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Sidebar HTML rendering tests.

use dipr_console::{Branding, MenuView, Role, SidebarTheme};
use dipr_test_utils::{Harness, assert, harness};

fn render_html(view: &MenuView) -> String {
    SidebarTheme::new()
        .unwrap()
        .render(view, &Branding::default())
        .unwrap()
}

#[test]
fn admin_sidebar_in_catalog_order() {
    let html = render_html(&MenuView::build(Some(Role::Admin), "/dashboard"));

    assert::ordered(&html, ">Dashboard<", ">Users<");
    assert::ordered(&html, ">Users<", ">Articles<");
    assert::ordered(&html, ">Notifications<", ">Moderation<");
    assert::ordered(&html, ">Moderation<", ">Logout</button>");
    assert::contains(&html, r#"<span class="icon icon-home" aria-hidden="true"></span>"#);
}

#[test]
fn logo_comes_before_menu() {
    let html = render_html(&MenuView::build(None, "/login"));

    assert::ordered(&html, r#"<div class="logo">"#, r#"<nav class="sidebar-menu""#);
    assert::contains(&html, r#"class="logo-image""#);
    assert::contains(&html, r#"alt="DIPR Admin""#);
}

#[test]
fn content_sidebar_from_store() {
    let Harness { menu, .. } = harness(Some("content"), "/manage-longvideo");
    let html = render_html(&menu.render().unwrap());

    assert::contains(
        &html,
        r#"<li class="menu-item menu-item-selected" data-key="/manage-longvideo">"#,
    );
    assert::contains(&html, ">March of Karnataka<");
    assert::contains(&html, ">Vartha Janapada<");
    assert::not_contains(&html, ">Users<");
    assert::not_contains(&html, ">Dashboard<");
}

#[test]
fn unprivileged_sidebar_has_only_logout() {
    let Harness { menu, .. } = harness(Some("user"), "/dashboard");
    let html = render_html(&menu.render().unwrap());

    assert_eq!(html.matches("<li ").count(), 1);
    assert::contains(&html, r#"class="button button-danger button-block""#);
    assert::contains(
        &html,
        r#"data-confirm-content="Are you sure you want to logout?""#,
    );
    assert::contains(&html, r#"data-confirm-cancel="Cancel""#);
}

#[test]
fn json_view_shape() {
    let view = MenuView::build(Some(Role::Moderator), "/manage-moderation");
    let json = serde_json::to_value(&view).unwrap();

    assert::json_eq(
        &json["entries"][9],
        &serde_json::json!({
            "key": "/manage-moderation",
            "label": "Moderation",
            "icon": "video-camera-add",
            "audience": "admin_or_moderator",
            "selected": true,
        }),
    );
    assert::json_eq(
        &json["entries"][10],
        &serde_json::json!({
            "key": "login",
            "label": "Logout",
            "icon": null,
            "audience": "everyone",
            "selected": false,
        }),
    );
}
