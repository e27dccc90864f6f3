pub fn print_banner(version: &str) {
    let banner = format!(
        r#"
  █████╗ ██████╗ ████████╗██╗ ██████╗██╗   ██╗██╗      ██████╗ ███████╗
 ██╔══██╗██╔══██╗╚══██╔══╝██║██╔════╝██║   ██║██║     ██╔═══██╗██╔════╝
 ███████║██████╔╝   ██║   ██║██║     ██║   ██║██║     ██║   ██║███████╗
 ██╔══██║██╔══██╗   ██║   ██║██║     ██║   ██║██║     ██║   ██║╚════██║
 ██║  ██║██║  ██║   ██║   ██║╚██████╗╚██████╔╝███████╗╚██████╔╝███████║
 ╚═╝  ╚═╝╚═╝  ╚═╝   ╚═╝   ╚═╝ ╚═════╝ ╚═════╝ ╚══════╝ ╚═════╝ ╚══════╝
                                                    articulos v{}
"#,
        version
    );

    tracing::info!("{}", banner);
}
