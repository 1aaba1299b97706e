use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Where the path words come from.
#[derive(Debug, Clone)]
pub enum Wordlist {
    BuiltIn,
    File(PathBuf),
}

impl Wordlist {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => Wordlist::File(p),
            None => Wordlist::BuiltIn,
        }
    }

    pub fn load(&self) -> Result<Vec<String>> {
        match self {
            Wordlist::BuiltIn => Ok(builtin_words()),
            Wordlist::File(path) => {
                let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Wordlist {
                    path: path.clone(),
                    source,
                })?;
                Ok(parse_words(&data))
            }
        }
    }
}

/// One word per line, trimmed. Blank lines and `#` comments are skipped.
pub fn parse_words(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|w| !w.is_empty() && !w.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn builtin_words() -> Vec<String> {
    BUILTIN_WORDS.iter().map(|w| w.to_string()).collect()
}

pub const BUILTIN_WORDS: &[&str] = &[
    // admin panels
    "admin", "administrator", "adm", "panel", "cpanel", "whm",
    "dashboard", "controlpanel", "cp", "manager", "management",
    // login
    "login", "signin", "auth", "authenticate", "user", "users",
    "member", "members", "account", "accounts", "profile",
    // configuration
    "config", "configuration", "conf", "cfg", "settings",
    "setup", "install", "configure", "env", ".env",
    "htaccess", ".htaccess", "htpasswd", ".htpasswd",
    // backups
    "backup", "bak", "temp", "tmp", "old", "new", "archive",
    "backups", "sql", "db", "database", "dump", "backup.sql",
    // development
    "dev", "development", "stage", "staging", "test", "tests",
    "demo", "sandbox", "debug", "testing",
    // apis
    "api", "rest", "graphql", "swagger", "swagger-ui",
    "docs", "documentation", "v1", "v2", "v3", "v4",
    // content
    "uploads", "images", "img", "css", "js", "assets",
    "static", "public", "files", "media", "downloads",
    // cms
    "wp-admin", "wp-content", "wp-includes", "wordpress", "wp",
    "joomla", "drupal", "magento", "shopify",
    // version control and editors
    ".git", ".svn", ".github", ".gitlab", ".idea", ".vscode",
    // logs
    "logs", "log", "error_log", "access_log",
    "debug_log", "application.log", "server.log",
    // sensitive
    "private", "secure", "hidden", "secret", "confidential",
    "internal", "restricted", "classified", "protected",
    // shells
    "shell", "cmd", "exec", "terminal", "console", "bash",
    "shell.php", "cmd.php", "exec.php", "backdoor",
    // server info
    "server-status", "server-info", "info", "phpinfo",
    "info.php", "status", "health", "healthcheck",
    // common files
    "index", "home", "default", "main", "robots.txt",
    "sitemap.xml", "crossdomain.xml", "favicon.ico",
    // web services
    "soap", "wsdl", "xmlrpc", "rpc", "json", "ajax",
    // databases
    "phpmyadmin", "pma", "mysql", "dbadmin", "adminer",
    "phpPgAdmin", "pgadmin", "phpMyAdmin", "myadmin",
    // file managers
    "filemanager", "explorer", "browser",
    // misc
    "cgi-bin", "cgi", "bin", "scripts", "includes", "classes",
    "lib", "libs", "vendor", "node_modules", "bower_components",
];
