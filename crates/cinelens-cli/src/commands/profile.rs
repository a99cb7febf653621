use super::profile_store;
use crate::output::{Output, OutputFormat};
use anyhow::Result;
use chrono::Utc;
use cinelens_models::User;
use dialoguer::Input;

pub fn run_show(output: &Output) -> Result<()> {
    let store = profile_store()?;

    match store.current_user()? {
        Some(user) => match output.format() {
            OutputFormat::Human => {
                output.info(format!("{} <{}>", user.name, user.email));
                if let Some(photo) = &user.photo_url {
                    output.info(format!("Photo: {}", photo));
                }
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                output.json(&serde_json::to_value(&user)?);
            }
        },
        None => output.info("Not signed in"),
    }
    Ok(())
}

pub fn run_login(
    name: Option<String>,
    email: Option<String>,
    photo: Option<String>,
    output: &Output,
) -> Result<()> {
    let name = match name {
        Some(name) => name,
        None => Input::new().with_prompt("Name").interact_text()?,
    };
    let email = match email {
        Some(email) => email,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    let user = User {
        // Opaque client-generated id; uniqueness at normal sign-in rates.
        id: Utc::now().timestamp_millis().to_string(),
        name,
        email,
        photo_url: photo,
    };

    let store = profile_store()?;
    store.set_current_user(&user)?;
    output.success(format!("Signed in as {}", user.name));
    Ok(())
}

pub fn run_logout(output: &Output) -> Result<()> {
    let store = profile_store()?;
    store.clear_current_user()?;
    output.success("Signed out");
    Ok(())
}
