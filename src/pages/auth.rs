use patternfly_yew::prelude::*;
use yew::prelude::*;

use super::title_section;
use crate::routing::RouteComponent;

pub const AUTHENTICATION_PAGE: RouteComponent = RouteComponent::new("AuthenticationPage", |ctx| {
    html!(<AuthenticationPage>{ctx.children.clone()}</AuthenticationPage>)
});

pub const USERS_PAGE: RouteComponent = RouteComponent::new("UsersPage", |_| html!(<UsersPage/>));

pub const CREATE_USERS_PAGE: RouteComponent =
    RouteComponent::new("CreateUsersPage", |_| html!(<CreateUsersPage/>));

pub const EDIT_USERS_PAGE: RouteComponent = RouteComponent::new("EditUsersPage", |ctx| {
    html!(<EditUsersPage username={ctx.param("username")}/>)
});

pub const ROLES_PAGE: RouteComponent = RouteComponent::new("RolesPage", |_| html!(<RolesPage/>));

pub const LDAP_PAGE: RouteComponent = RouteComponent::new("LdapPage", |_| html!(<LdapPage/>));

pub const LDAP_GROUPS_PAGE: RouteComponent =
    RouteComponent::new("LdapGroupsPage", |_| html!(<LdapGroupsPage/>));

#[derive(Clone, PartialEq, Properties)]
pub struct AuthenticationProps {
    #[prop_or_default]
    pub children: Children,
}

/// Wraps the user, role and provider management pages.
#[function_component(AuthenticationPage)]
pub fn authentication_page(props: &AuthenticationProps) -> Html {
    html!(
        <>
            { title_section("Authentication management") }
            { for props.children.iter() }
        </>
    )
}

#[function_component(UsersPage)]
pub fn users_page() -> Html {
    html!(
        <PageSection>
            <Content>
                <p>{"User accounts known to this cluster."}</p>
            </Content>
        </PageSection>
    )
}

#[function_component(CreateUsersPage)]
pub fn create_users_page() -> Html {
    html!(
        <PageSection>
            <Content>
                <p>{"Create a new user account."}</p>
            </Content>
        </PageSection>
    )
}

#[derive(Clone, Debug, Eq, PartialEq, Properties)]
pub struct EditUserProps {
    pub username: AttrValue,
}

#[function_component(EditUsersPage)]
pub fn edit_users_page(props: &EditUserProps) -> Html {
    html!(
        <PageSection>
            <Content>
                <p>{format!("Editing user {}.", props.username)}</p>
            </Content>
        </PageSection>
    )
}

#[function_component(RolesPage)]
pub fn roles_page() -> Html {
    html!(
        <PageSection>
            <Content>
                <p>{"Roles grant read or write access to sets of streams and dashboards."}</p>
            </Content>
        </PageSection>
    )
}

#[function_component(LdapPage)]
pub fn ldap_page() -> Html {
    html!(
        <>
            { title_section("LDAP settings") }
            <PageSection>
                <Content>
                    <p>{"Connection settings for syncing users from a directory server."}</p>
                </Content>
            </PageSection>
        </>
    )
}

#[function_component(LdapGroupsPage)]
pub fn ldap_groups_page() -> Html {
    html!(
        <>
            { title_section("LDAP group mapping") }
            <PageSection>
                <Content>
                    <p>{"Map directory groups onto roles."}</p>
                </Content>
            </PageSection>
        </>
    )
}
