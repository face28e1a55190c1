//! 인증 서비스 터미널 클라이언트
//!
//! ```bash
//! auth_client signup --name Alice --email a@x.com --password secret1
//! auth_client signin --email a@x.com --password secret1
//! auth_client dashboard
//! auth_client logout
//! auth_client form        # 대화형 폼
//! ```

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use clap::{Parser, Subcommand};
use env_logger::Env;
use auth_service::client::{
    view, ApiClient, AuthForm, ClientApp, ClientError, FormMode, NoticeKind, Route, Session, TokenStore,
};
use auth_service::client::app::REDIRECT_DELAY;

#[derive(Parser, Debug)]
#[command(name = "auth_client", about = "Terminal client for the auth service")]
struct Cli {
    /// `/api`까지 포함한 서버 주소
    #[arg(long, env = "AUTH_API_URL", default_value = auth_service::client::api::DEFAULT_API_URL)]
    api_url: String,

    /// 토큰 저장 디렉터리
    #[arg(long, env = "AUTH_CLIENT_HOME")]
    home: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 로컬 계정 생성
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// 로컬 계정 로그인
    Signin {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Firebase ID 토큰으로 로그인
    Google {
        #[arg(long)]
        id_token: String,
    },
    /// 현재 사용자 정보 표시 (로그인 필요)
    Dashboard,
    Logout,
    Status,
    /// 대화형 로그인/회원가입 폼
    Form,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// 명령을 실행하고 성공 여부를 반환합니다.
async fn run(cli: Cli) -> Result<bool, ClientError> {
    let store = match cli.home {
        Some(home) => TokenStore::new(home),
        None => TokenStore::from_env()?,
    };
    let session = Session::restore(store)?;
    let mut app = ClientApp::new(ApiClient::new(cli.api_url), session);

    match cli.command {
        Command::Signup { name, email, password } => {
            app.form = AuthForm::new(FormMode::SignUp);
            app.form.name = name;
            app.form.email = email;
            app.form.password = password;
            let kind = app.submit_form().await?;
            print_notice(&mut app);
            Ok(kind == NoticeKind::Success)
        }
        Command::Signin { email, password } => {
            app.form.email = email;
            app.form.password = password;
            let kind = app.submit_form().await?;
            print_notice(&mut app);
            Ok(kind == NoticeKind::Success)
        }
        Command::Google { id_token } => {
            let kind = app.google_sign_in(&id_token).await?;
            print_notice(&mut app);
            Ok(kind == NoticeKind::Success)
        }
        Command::Dashboard => show_dashboard(&mut app).await,
        Command::Logout => {
            app.logout()?;
            print_notice(&mut app);
            Ok(true)
        }
        Command::Status => {
            println!("{}", view::status(app.session()));
            Ok(app.session().is_authenticated())
        }
        Command::Form => run_form(&mut app).await,
    }
}

async fn show_dashboard(app: &mut ClientApp) -> Result<bool, ClientError> {
    match app.load_dashboard().await? {
        Some(profile) => {
            println!("{}", view::dashboard(&profile));
            Ok(true)
        }
        None => {
            if app.route() == Route::Auth && app.notice().is_none() {
                eprintln!("{}", ClientError::NotAuthenticated);
            }
            print_notice(app);
            Ok(false)
        }
    }
}

/// 대화형 폼
///
/// 로그인에 성공하면 잠시 후 대시보드를 보여주고 종료합니다.
async fn run_form(app: &mut ClientApp) -> Result<bool, ClientError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("{}", view::auth_form(&app.form));
        print_notice(app);

        let choice = prompt(&mut input, ">")?;
        let kind = match choice.as_str() {
            "s" => {
                if app.form.uses_name() {
                    app.form.name = prompt(&mut input, "Full Name:")?;
                }
                app.form.email = prompt(&mut input, "Email Address:")?;
                app.form.password = prompt(&mut input, "Password:")?;
                app.submit_form().await?
            }
            "g" => {
                let id_token = prompt(&mut input, "Firebase ID token:")?;
                app.google_sign_in(&id_token).await?
            }
            "t" => {
                app.form.toggle_mode();
                continue;
            }
            "q" | "" => return Ok(false),
            _ => continue,
        };

        if kind == NoticeKind::Success && app.route() == Route::Dashboard {
            print_notice(app);
            tokio::time::sleep(REDIRECT_DELAY).await;
            return show_dashboard(app).await;
        }
    }
}

fn prompt(input: &mut impl BufRead, label: &str) -> Result<String, ClientError> {
    print!("{} ", label);
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn print_notice(app: &mut ClientApp) {
    if let Some(notice) = app.notice() {
        match notice.kind {
            NoticeKind::Success => println!("{}", view::notice(notice)),
            NoticeKind::Error => eprintln!("{}", view::notice(notice)),
        }
    }
}
