use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("pagesift")
        .version(env!("CARGO_PKG_VERSION"))
        .author("pagesift Contributors")
        .about("Sift headings, links, paragraphs and images out of a web page")
        .arg(clap::arg!(<URL> "URL of the page to scrape (e.g. https://example.com)"))
        .arg(clap::arg!(-k --keyword <KEYWORD> "Keyword to search for in headings, paragraphs and link text"))
        .arg(clap::arg!(--headings "Extract h1-h3 headings"))
        .arg(clap::arg!(--links "Extract links"))
        .arg(clap::arg!(--paragraphs "Extract paragraphs"))
        .arg(clap::arg!(--images "Extract images"))
        .arg(clap::arg!(-a --all "Extract every category"))
        .arg(
            clap::arg!(-o --"output-dir" <DIR> "Directory to write exported files into")
                .value_name("DIR")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--"zip-images" "Download every image into images.zip (implies --images)"))
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (text, json)")
                .value_name("FORMAT")
                .default_value("text")
                .value_parser(["text", "json"]),
        )
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--"user-agent" <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(--"resolve-relative" "Resolve relative image sources against the page URL"))
        .arg(clap::arg!(--"top-words" <NUM> "Number of words in the paragraph word summary").default_value("20"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "pagesift", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "pagesift", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "pagesift", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "pagesift", &completions_dir).unwrap();
}
