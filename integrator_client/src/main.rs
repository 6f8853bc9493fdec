use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};

use integrator_client::backend::BackendClient;
use integrator_client::render::render_posts;
use integrator_client::session::{FetchState, Session};

/// Social Media Integrator - cliente interativo de linha de comando
#[derive(Parser)]
#[command(name = "integrator-client")]
#[command(version = "0.1.0")]
#[command(about = "Cliente do gateway Social Media Integrator (Twitter/X)", long_about = None)]
struct Cli {
    /// URL base do gateway
    #[arg(
        long,
        env = "INTEGRATOR_BACKEND_URL",
        default_value = "http://127.0.0.1:5000",
        global = true
    )]
    backend: String,

    /// Modo verbose para debug
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Comando a executar
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Abre a página de login do Twitter/X via gateway
    Login {
        /// Apenas imprime a URL, sem abrir o navegador
        #[arg(long)]
        no_browser: bool,
    },

    /// Busca os tweets com um access token colado
    Fetch {
        /// Access token (ou use TWITTER_ACCESS_TOKEN; sem ambos, cole no prompt)
        #[arg(short = 't', long, env = "TWITTER_ACCESS_TOKEN")]
        token: Option<String>,

        /// Imprime a lista como JSON em vez da listagem renderizada
        #[arg(long)]
        json: bool,
    },

    /// Sessão interativa: login, colar token e buscar em loop
    Interactive,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    // Configura logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();
    }

    if let Err(e) = run(&cli).await {
        eprintln!("❌ Erro: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let backend = BackendClient::new(cli.backend.clone())?;

    match &cli.command {
        Commands::Login { no_browser } => {
            let url = backend.login_url();
            println!("🔐 Login: {}", url);
            println!("📌 Autorize o acesso e copie o access token da página de callback.");

            if !*no_browser {
                if let Err(e) = webbrowser::open(&url) {
                    log::warn!("Não foi possível abrir o navegador automaticamente: {}", e);
                    println!("🔗 Abra manualmente o link acima.");
                }
            }

            Ok(())
        }

        Commands::Fetch { token, json } => {
            let raw_token = match token {
                Some(t) => t.clone(),
                None => prompt_token()?,
            };

            let mut session = Session::new(backend);
            session.fetch(&raw_token).await;
            report(&session, *json);

            if matches!(session.state(), FetchState::Errored(_)) {
                std::process::exit(1);
            }

            Ok(())
        }

        Commands::Interactive => run_interactive(backend).await,
    }
}

/// Mostra o resultado da busca para o usuário
fn report(session: &Session, json: bool) {
    match session.state() {
        FetchState::Loaded => {
            println!("✅ Tweets carregados com sucesso!");
            if json {
                match serde_json::to_string_pretty(session.posts()) {
                    Ok(out) => println!("{}", out),
                    Err(e) => eprintln!("❌ Erro ao serializar resposta: {}", e),
                }
            } else {
                println!("{}", render_posts(session.posts()));
            }
        }
        FetchState::Errored(msg) => {
            eprintln!("❌ {}", msg);
        }
        _ => {}
    }
}

/// Lê o token colado no terminal (multi-linha; linha vazia encerra)
fn prompt_token() -> io::Result<String> {
    println!("📋 Cole o access token da página de callback (linha vazia para terminar):");

    let stdin = io::stdin();
    let mut lines = Vec::new();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }

    Ok(lines.join(""))
}

/// Loop interativo: o usuário repete login/token/fetch quantas vezes quiser.
/// A lista carregada fica retida na sessão entre comandos.
async fn run_interactive(backend: BackendClient) -> Result<(), Box<dyn std::error::Error>> {
    let login_url = backend.login_url();
    let mut session = Session::new(backend);
    let mut token = String::new();

    println!("🌐 Social Media Integrator");
    println!("Comandos: login | token | fetch | show | quit");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "login" => {
                println!("🔐 {}", login_url);
                if webbrowser::open(&login_url).is_err() {
                    println!("🔗 Abra manualmente o link acima.");
                }
            }
            "token" => {
                token = prompt_token()?;
                println!("✅ Token registrado ({} caracteres)", token.trim().len());
            }
            "fetch" => {
                println!("⏳ Buscando tweets no backend...");
                session.fetch(&token).await;
                match session.state() {
                    FetchState::Loaded => {
                        println!("✅ Tweets carregados com sucesso!");
                        println!("{}", render_posts(session.posts()));
                    }
                    FetchState::Errored(msg) => println!("❌ {}", msg),
                    _ => {}
                }
            }
            "show" => println!("{}", render_posts(session.posts())),
            "quit" | "exit" => break,
            "" => {}
            other => println!("Comando desconhecido: {}", other),
        }
    }

    Ok(())
}
