use anyhow::Result;
use helpdoc_config::Config;
use helpdoc_engine::{ParseResult, io, parse};
use std::{env, fs, path::PathBuf, process};

struct Args {
    app_id: Option<String>,
    docs_path: Option<PathBuf>,
    output: Option<PathBuf>,
    list: bool,
}

fn parse_args(raw: &[String]) -> Option<Args> {
    let mut args = Args {
        app_id: None,
        docs_path: None,
        output: None,
        list: false,
    };

    let mut it = raw.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--list" => args.list = true,
            "-o" | "--output" => args.output = Some(PathBuf::from(it.next()?)),
            _ if args.app_id.is_none() && !args.list => args.app_id = Some(arg.clone()),
            _ if args.docs_path.is_none() => args.docs_path = Some(PathBuf::from(arg)),
            _ => return None,
        }
    }

    // Exactly one of list mode or an app id.
    if args.list == args.app_id.is_some() {
        return None;
    }
    Some(args)
}

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} <app-id> [docs-path] [-o output.html]");
    eprintln!("       {program} --list [docs-path]");
    process::exit(1);
}

fn main() -> Result<()> {
    let raw: Vec<String> = env::args().collect();
    let Some(args) = parse_args(&raw[1..]) else {
        usage(&raw[0]);
    };

    // The docs path argument wins over the config file.
    let config_path = Config::config_path();
    let docs_path = match args.docs_path {
        Some(path) => path,
        None => match Config::load() {
            Ok(Some(config)) => config.docs_path,
            Ok(None) => {
                eprintln!("Error: No docs path provided and no config file found");
                eprintln!("Create a config file at {}", config_path.display());
                usage(&raw[0]);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                usage(&raw[0]);
            }
        },
    };

    if let Err(e) = io::validate_docs_dir(&docs_path) {
        eprintln!(
            "Error: Docs path '{}' is invalid: {e}",
            docs_path.display()
        );
        process::exit(1);
    }

    if args.list {
        for id in io::doc_ids(&docs_path)? {
            println!("{id}");
        }
        return Ok(());
    }

    let app_id = args.app_id.expect("checked by parse_args");
    let doc = io::read_doc(&app_id, &docs_path)?;
    let result = parse(&doc.body);
    let title = doc.title.as_deref().unwrap_or(&app_id);
    let page = render_page(title, &result);

    match args.output {
        Some(path) => fs::write(path, page)?,
        None => print!("{page}"),
    }

    Ok(())
}

/// Wraps the rendered markup in a standalone page with a TOC panel.
/// Each nav entry links to its heading id; scroll-spy highlighting is
/// left to the embedding application.
fn render_page(title: &str, result: &ParseResult) -> String {
    let mut nav = String::new();
    for entry in &result.toc {
        nav.push_str(&format!(
            "<li class=\"level-{}\"><a href=\"#{}\">{}</a></li>\n",
            entry.level, entry.id, entry.text
        ));
    }

    format!(
        "<!doctype html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <style>\n\
         body {{ display: flex; font-family: sans-serif; }}\n\
         nav {{ min-width: 16em; }}\n\
         nav ul {{ list-style: none; padding-left: 0; }}\n\
         nav .level-2 {{ padding-left: 1em; }}\n\
         nav .level-3 {{ padding-left: 2em; }}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         <nav>\n<ul>\n{nav}</ul>\n</nav>\n\
         <article>\n{markup}\n</article>\n\
         </body>\n\
         </html>\n",
        markup = result.markup,
    )
}
