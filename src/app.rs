//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Outlet, ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::sidebar::Sidebar;
use crate::components::toast::Toast;
use crate::components::top_navbar::TopNavbar;
use crate::pages::{
    account::AccountPage, change_password::ChangePasswordPage, dashboard::DashboardPage,
    forgot_password::ForgotPasswordPage, login::LoginPage, signup::SignupPage,
};
use crate::routes::RequireAuth;
use crate::session::SessionStore;
use crate::state::auth::AuthStore;
use crate::state::notify::NotifyStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth and notification state and sets up client-side
/// routing. Auth state is seeded from whatever session survived the last
/// visit.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::shared();
    provide_context(AuthStore::new(&session));
    provide_context(NotifyStore::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/sou-influencer.css"/>
        <Title text="Sou Influencer"/>

        <Router>
            <Toast/>
            <Routes fallback=|| view! { <Redirect path="/login"/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("cadastro") view=SignupPage/>
                <Route path=StaticSegment("esqueci-a-senha") view=ForgotPasswordPage/>
                <Route path=StaticSegment("alterar-senha") view=ChangePasswordPage/>
                <ParentRoute path=StaticSegment("") view=PrivateArea>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("meu-cadastro") view=AccountPage/>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Authenticated chrome: route guard, sidebar, top navbar, routed content.
#[component]
fn PrivateArea() -> impl IntoView {
    let sidebar_open = RwSignal::new(false);
    let on_toggle = Callback::new(move |()| sidebar_open.update(|open| *open = !*open));

    view! {
        <RequireAuth>
            <div class="app-shell">
                <Sidebar is_open=sidebar_open on_toggle=on_toggle/>
                <div class="app-shell__main">
                    <TopNavbar on_toggle_sidebar=on_toggle/>
                    <main class="app-shell__content">
                        <Outlet/>
                    </main>
                </div>
            </div>
        </RequireAuth>
    }
}
