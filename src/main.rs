use std::{
    io::{self, Write},
    process,
    sync::Arc,
};

use folio::{
    application::{
        blog::BlogPage, chrome::ChromeService, error::AppError, links::SiteLinks,
        theme::ThemeService,
    },
    config::{self, Command, ListArgs, PostArgs, ThemeArgs, ThemeCommand},
    domain::posts::{PostFilter, PostStore},
    infra::{content, error::InfraError, preferences::JsonFilePreferenceStore, telemetry},
    presentation::{document::Document, views::render_page},
};
use tracing::{Dispatch, Level, debug, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

fn main() {
    if let Err(error) = run() {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    let report = error.report();
    if dispatcher::has_been_set() {
        error!(source = report.source, error = %report.joined(), "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::ERROR)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(source = report.source, error = %report.joined(), "application error");
    });
}

fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    telemetry::init(&settings.logging)?;

    let command = cli_args
        .command
        .unwrap_or(Command::List(ListArgs::default()));

    match command {
        Command::List(args) => run_list(&settings, args),
        Command::Post(args) => run_post(&settings, args),
        Command::Tags => run_tags(&settings),
        Command::Theme(args) => run_theme(&settings, args),
    }
}

fn run_list(settings: &config::Settings, args: ListArgs) -> Result<(), AppError> {
    let store = load_store(settings)?;
    if let Some(tag) = args.tag.as_deref() {
        if !store.is_known_tag(tag) {
            info!(target = "folio::listing", tag, "no post carries the requested tag");
        }
    }

    let page = blog_page(settings, store);
    let mut document = page.listing_document();
    page.render_list(&mut document, &PostFilter::from_tag(args.tag.as_deref()))?;

    print_page(settings, &document)
}

fn run_post(settings: &config::Settings, args: PostArgs) -> Result<(), AppError> {
    let store = load_store(settings)?;
    let page = blog_page(settings, store);
    let mut document = page.post_document();
    page.render_post(&mut document, &args.query)?;

    print_page(settings, &document)
}

fn run_tags(settings: &config::Settings) -> Result<(), AppError> {
    let store = load_store(settings)?;
    let mut stdout = io::stdout().lock();
    for tag in store.all_tags() {
        writeln!(stdout, "{tag}").map_err(InfraError::from)?;
    }
    Ok(())
}

fn run_theme(settings: &config::Settings, args: ThemeArgs) -> Result<(), AppError> {
    let mut themes = theme_service(settings);
    let theme = match args.command.unwrap_or(ThemeCommand::Show) {
        ThemeCommand::Show => themes.current()?,
        ThemeCommand::Toggle => themes.toggle()?,
        ThemeCommand::Set { theme } => themes.set(theme)?,
    };

    writeln!(io::stdout(), "{theme}").map_err(InfraError::from)?;
    Ok(())
}

fn load_store(settings: &config::Settings) -> Result<Arc<PostStore>, AppError> {
    let store = match settings.content.posts_file.as_deref() {
        Some(path) => content::load_posts(path)?,
        None => {
            debug!(target = "folio::content", "using built-in posts");
            PostStore::sample()
        }
    };
    Ok(Arc::new(store))
}

fn blog_page(settings: &config::Settings, store: Arc<PostStore>) -> BlogPage {
    let links = SiteLinks::new(
        settings.site.listing_path.clone(),
        settings.site.post_path.clone(),
    );
    BlogPage::new(store, links, &settings.site.owner_name)
}

fn theme_service(settings: &config::Settings) -> ThemeService<JsonFilePreferenceStore> {
    ThemeService::new(JsonFilePreferenceStore::new(
        settings.theme.preferences_file.clone(),
    ))
}

fn print_page(settings: &config::Settings, document: &Document) -> Result<(), AppError> {
    let theme = theme_service(settings).current()?;
    let chrome = ChromeService::new(&settings.site).load();
    let html = render_page(chrome, theme, document)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(html.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(InfraError::from)?;
    Ok(())
}
