use std::collections::HashMap;
use std::path::Path;

use crate::config::CustomLanguageConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSyntax {
    /// Prefixes that comment out the rest of the line.
    pub single_line: Vec<String>,
    /// Start/end delimiter pairs of block comments.
    pub multi_line: Vec<(String, String)>,
}

impl CommentSyntax {
    #[must_use]
    pub fn new(single_line: Vec<&str>, multi_line: Vec<(&str, &str)>) -> Self {
        Self {
            single_line: single_line.into_iter().map(String::from).collect(),
            multi_line: multi_line
                .into_iter()
                .map(|(s, e)| (s.to_string(), e.to_string()))
                .collect(),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.single_line.is_empty() && self.multi_line.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub name: String,
    pub extensions: Vec<String>,
    pub comment_syntax: CommentSyntax,
}

impl Language {
    #[must_use]
    pub fn new(name: &str, extensions: Vec<&str>, comment_syntax: CommentSyntax) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.into_iter().map(String::from).collect(),
            comment_syntax,
        }
    }
}

/// Immutable-after-construction lookup from file extension to language.
///
/// Extensions are matched case-sensitively: `M` is Objective-C while `m` is
/// too, but `R` and `r` both have to be listed for R.
#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
    extension_map: HashMap<String, usize>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            languages: Vec::new(),
            extension_map: HashMap::new(),
        }
    }

    /// Add a language. Its extensions take over any earlier mapping.
    pub fn register(&mut self, language: Language) {
        let idx = self.languages.len();
        for ext in &language.extensions {
            self.extension_map.insert(ext.clone(), idx);
        }
        self.languages.push(language);
    }

    #[must_use]
    pub fn get_by_extension(&self, ext: &str) -> Option<&Language> {
        self.extension_map
            .get(ext)
            .map(|&idx| &self.languages[idx])
    }

    /// Look a path up by its extension. Paths without one are unknown.
    #[must_use]
    pub fn get_for_path(&self, path: &Path) -> Option<&Language> {
        self.index_for_path(path).map(|idx| &self.languages[idx])
    }

    /// Position in [`Self::all`] of the language `path` belongs to.
    #[must_use]
    pub fn index_for_path(&self, path: &Path) -> Option<usize> {
        let ext = path.extension()?.to_str()?;
        self.extension_map.get(ext).copied()
    }

    #[must_use]
    pub fn all(&self) -> &[Language] {
        &self.languages
    }

    #[must_use]
    pub fn with_custom_languages(custom: &HashMap<String, CustomLanguageConfig>) -> Self {
        let mut registry = Self::default();

        let mut names: Vec<_> = custom.keys().collect();
        names.sort();
        for name in names {
            let config = &custom[name];
            let syntax = CommentSyntax {
                single_line: config.single_line_comments.clone(),
                multi_line: config.multi_line_comments.clone(),
            };
            registry.register(Language {
                name: name.clone(),
                extensions: config.extensions.clone(),
                comment_syntax: syntax,
            });
        }

        registry
    }
}

impl Default for LanguageRegistry {
    #[allow(clippy::too_many_lines)]
    fn default() -> Self {
        let c_style = || CommentSyntax::new(vec!["//"], vec![("/*", "*/")]);
        let hash_only = || CommentSyntax::new(vec!["#"], vec![]);

        let mut registry = Self::new();

        registry.register(Language::new("ActionScript", vec!["as"], c_style()));
        registry.register(Language::new(
            "ASP",
            vec!["asa", "asp"],
            CommentSyntax::new(vec!["'"], vec![]),
        ));
        registry.register(Language::new("C", vec!["c", "h"], c_style()));
        registry.register(Language::new("C#", vec!["cs"], c_style()));
        registry.register(Language::new(
            "C++",
            vec!["c++", "cpp", "cp", "cc", "hh"],
            c_style(),
        ));
        registry.register(Language::new(
            "Clojure",
            vec!["clj"],
            CommentSyntax::new(vec![";"], vec![]),
        ));
        registry.register(Language::new(
            "CSS",
            vec!["css"],
            CommentSyntax::new(vec![], vec![("/*", "*/")]),
        ));
        registry.register(Language::new(
            "D",
            vec!["d", "di"],
            CommentSyntax::new(vec!["//"], vec![("/*", "*/"), ("/+", "+/")]),
        ));
        registry.register(Language::new(
            "Erlang",
            vec!["erl", "hrl"],
            CommentSyntax::new(vec!["%"], vec![]),
        ));
        registry.register(Language::new("Go", vec!["go"], c_style()));
        registry.register(Language::new(
            "Dot",
            vec!["dot", "DOT"],
            CommentSyntax::new(vec!["//", "#"], vec![("/*", "*/")]),
        ));
        registry.register(Language::new(
            "Groovy",
            vec!["groovy", "gvy"],
            CommentSyntax::new(vec!["//", "#"], vec![("/*", "*/")]),
        ));
        registry.register(Language::new(
            "Haskell",
            vec!["hs"],
            CommentSyntax::new(vec!["--"], vec![("{-", "-}")]),
        ));
        registry.register(Language::new(
            "HTML",
            vec!["html", "htm", "shtml", "xhtml", "phtml", "tmpl", "tpl"],
            CommentSyntax::new(vec![], vec![("<!--", "-->")]),
        ));
        registry.register(Language::new("Java", vec!["java"], c_style()));
        registry.register(Language::new("JavaScript", vec!["js", "jsx"], c_style()));
        registry.register(Language::new(
            "Lisp",
            vec!["lisp", "cl", "l"],
            CommentSyntax::new(vec![";"], vec![("#|", "|#")]),
        ));
        registry.register(Language::new(
            "Lua",
            vec!["lua"],
            CommentSyntax::new(vec!["--"], vec![]),
        ));
        registry.register(Language::new(
            "Objective-C",
            vec!["m", "mm", "M"],
            c_style(),
        ));
        registry.register(Language::new(
            "OCaml",
            vec!["ml", "mli", "mll"],
            CommentSyntax::new(vec![], vec![("(*", "*)")]),
        ));
        registry.register(Language::new(
            "Pascal",
            vec!["pas", "p"],
            CommentSyntax::new(vec!["//"], vec![("(*", "*)"), ("{", "}")]),
        ));
        registry.register(Language::new(
            "Perl",
            vec!["pl", "pm"],
            CommentSyntax::new(vec!["#"], vec![("=pod", "=cut"), ("=head1", "=cut")]),
        ));
        registry.register(Language::new(
            "PHP",
            vec!["php"],
            CommentSyntax::new(vec!["//", "#"], vec![("/*", "*/")]),
        ));
        registry.register(Language::new(
            "Python",
            vec!["py", "rpy", "cpy", "pyw"],
            CommentSyntax::new(vec!["#"], vec![("\"\"\"", "\"\"\""), ("'''", "'''")]),
        ));
        registry.register(Language::new("R", vec!["R", "r", "s", "S"], hash_only()));
        registry.register(Language::new(
            "Ruby",
            vec!["rb", "rbx", "rjs"],
            CommentSyntax::new(vec!["#"], vec![("=begin", "=end")]),
        ));
        registry.register(Language::new("Rust", vec!["rs"], c_style()));
        registry.register(Language::new("Scala", vec!["scala"], c_style()));
        registry.register(Language::new(
            "Shell",
            vec!["sh", "bash", "zsh"],
            hash_only(),
        ));
        registry.register(Language::new(
            "SQL",
            vec!["sql"],
            CommentSyntax::new(vec!["--"], vec![("/*", "*/")]),
        ));

        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
