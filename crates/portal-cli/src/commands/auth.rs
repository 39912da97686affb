use anyhow::{Result, bail};

use portal_application::PortalContext;
use portal_core::auth::LoginCredentials;

pub async fn login(ctx: &PortalContext, username: &str, password: &str) -> Result<()> {
    let session = ctx.session();
    if let Err(e) = session
        .login(&LoginCredentials::new(username, password))
        .await
    {
        bail!("{}", session.error_message(&e));
    }

    if let Some(user) = session.current_user().await {
        println!("✅ Signed in as {} ({})", user.display_name(), user.role);
    }
    Ok(())
}

pub async fn logout(ctx: &PortalContext) {
    ctx.session().logout().await;
    println!("👋 Signed out");
}

pub async fn whoami(ctx: &PortalContext, json: bool) -> Result<()> {
    let state = ctx.session().auth_state().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    match state.user.filter(|_| state.is_authenticated) {
        Some(user) => {
            println!("{} <{}>", user.display_name(), user.email);
            println!("  username: {}", user.username);
            println!("  role:     {}", user.role);
            if let Some(last_login) = user.last_login_at {
                println!("  last login: {}", last_login.to_rfc3339());
            }
        }
        None => println!("Not signed in"),
    }
    Ok(())
}
