//! Signed-in identity at the top of the sidebar.

#[cfg(test)]
#[path = "sidebar_user_test.rs"]
mod sidebar_user_test;

use leptos::prelude::*;

use crate::net::types::User;

/// Uppercased first character of the name, `?` when there is none.
#[must_use]
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

#[must_use]
pub fn display_name(user: Option<&User>) -> &str {
    user.map(|u| u.name.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or("User")
}

#[component]
pub fn SidebarUser(user: Option<User>) -> impl IntoView {
    let name = display_name(user.as_ref()).to_owned();
    let initial = avatar_initial(user.as_ref().map_or("", |u| u.name.as_str()));
    let email = user.as_ref().map(|u| u.email.clone()).unwrap_or_default();
    let image = user.and_then(|u| u.image);

    view! {
        <div class="sidebar-user">
            {match image {
                Some(src) => view! { <img class="sidebar-user__avatar" src=src alt=name.clone()/> }.into_any(),
                None => view! { <span class="sidebar-user__avatar sidebar-user__avatar--initial">{initial}</span> }.into_any(),
            }}
            <div class="sidebar-user__identity">
                <span class="sidebar-user__name">{name}</span>
                <span class="sidebar-user__email">{email}</span>
            </div>
        </div>
    }
}
