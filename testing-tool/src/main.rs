use colored::*;
use serde_json::{json, Value};
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "🚛 FindMyFleet Testing Tool".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());
    println!();

    // Paso 1: URL base de la API
    let base_url = prompt("URL de la API (enter = http://localhost:3000): ")?;
    let base_url = if base_url.is_empty() {
        "http://localhost:3000".to_string()
    } else {
        base_url.trim_end_matches('/').to_string()
    };

    let client = reqwest::Client::new();

    // Paso 2: Menú principal
    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 🔐 Probar login");
        println!("2. 🚗 Listar vehículos");
        println!("3. 🗺️ Ver log de viajes");
        println!("4. 📊 Ver dashboard");
        println!("5. 🚪 Salir");
        print!("{}", "Selecciona una opción (1-5): ".bright_yellow());
        io::stdout().flush()?;

        let mut choice = String::new();
        io::stdin().read_line(&mut choice)?;
        let choice = choice.trim();

        match choice {
            "1" => {
                test_login(&client, &base_url).await?;
            }
            "2" => {
                test_get(&client, &base_url, "/api/vehicle", "Vehículos").await?;
            }
            "3" => {
                test_get(&client, &base_url, "/api/trip", "Viajes").await?;
            }
            "4" => {
                test_get(&client, &base_url, "/api/dashboard", "Dashboard").await?;
            }
            "5" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
            }
        }
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String, Box<dyn std::error::Error>> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;
    let mut value = String::new();
    io::stdin().read_line(&mut value)?;
    Ok(value.trim().to_string())
}

async fn test_login(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "🔐 CREDENCIALES".bright_cyan().bold());
    println!("{}", "================".bright_cyan());
    let email = prompt("Email: ")?;
    let password = prompt("Password: ")?;

    let response = client
        .post(format!("{}/api/auth/login", base_url))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await?;

    let status = response.status();
    let body: Value = response.json().await.unwrap_or(Value::Null);

    if status.is_success() {
        println!("{} {}", "✅ Login OK:".bright_green(), body["message"]);
        if body["legacy"] == true {
            println!("{}", "   (verificación legacy, sin sesión)".bright_yellow());
        }
    } else {
        println!(
            "{} status {} - {}",
            "❌ Login falló:".bright_red(),
            status,
            body["message"]
        );
    }
    Ok(())
}

async fn test_get(
    client: &reqwest::Client,
    base_url: &str,
    path: &str,
    label: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    println!();
    println!("{} {}", "🔍 Consultando".bright_cyan(), path.bright_cyan().bold());

    let response = client.get(format!("{}{}", base_url, path)).send().await?;
    let status = response.status();
    let body: Value = response.json().await.unwrap_or(Value::Null);

    if status.is_success() {
        println!("{} {}:", "✅".bright_green(), label.bright_green().bold());
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!(
            "{} status {} - {}",
            "❌ Error:".bright_red(),
            status,
            body["message"]
        );
    }
    Ok(())
}
