//! Export macros (`API_CPPR void f();`) hide declarations from a parser that
//! does not preprocess. They are blanked out with spaces before parsing so
//! every byte offset and line number stays valid.
//!
//! A macro is blanked when it is
//! - named by the caller,
//! - `#define`d in the file with an empty or attribute-only body, or
//! - an upper-case word prefixing a declaration that already has a type
//!   and a name (`API Owner<byte>\nalloc(...)`, `class API Foo {`), or a
//!   specifier or destructor (`API virtual ~Foo();`).

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;
use tracing::debug;

static RE_EMPTY_DEFINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?m)^[ \t]*#[ \t]*define[ \t]+([A-Za-z_]\w*)[ \t]*",
        r"(?:__declspec\([^)\n]*\)|__attribute__\(\([^\n]*\)\))?[ \t]*\r?$"
    ))
    .unwrap()
});

// Upper-case word, then at least one type word, then `name(`.
static RE_FUNCTION_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?m)(?:^|[{};]|[^:]:|\*/)[ \t]*([A-Z][A-Z0-9_]+)\s+",
        r"([A-Za-z_][\w:]*)(?:<[^;{}()]*>)?[\s*&]+",
        r"(?:[A-Za-z_][\w:]*(?:<[^;{}()]*>)?[\s*&]+)*",
        r"(?:operator\b[^;{}]*?|~?[A-Za-z_]\w*)\s*\("
    ))
    .unwrap()
});

// Upper-case word before a specifier or a destructor, which no type precedes.
static RE_SPECIFIER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?m)(?:^|[{};]|[^:]:|\*/)[ \t]*([A-Z][A-Z0-9_]+)\s+",
        r"(?:(?:extern|static|inline|virtual|explicit|constexpr|friend)\b|~[A-Za-z_]\w*\s*\()"
    ))
    .unwrap()
});

static RE_RECORD_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:class|struct|union)[ \t]+([A-Z][A-Z0-9_]+)[ \t]+[A-Za-z_]\w*\s*(?:final\s*)?[:{]")
        .unwrap()
});

/// Copy of `text` with export macros replaced by spaces.
pub fn neutralize(text: &str, configured: &[String]) -> String {
    let mut spans: Vec<(usize, usize)> = Vec::new();

    let mut names: BTreeSet<&str> = configured.iter().map(String::as_str).collect();
    names.extend(
        RE_EMPTY_DEFINE
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|name| name.as_str()),
    );
    if !names.is_empty() {
        let alternation = names.iter().map(|n| regex::escape(n)).collect::<Vec<_>>().join("|");
        if let Ok(re) = Regex::new(&format!(r"\b(?:{alternation})\b")) {
            spans.extend(
                re.find_iter(text)
                    .filter(|m| !on_directive_line(text, m.start()))
                    .map(|m| (m.start(), m.end())),
            );
        }
    }

    for caps in RE_FUNCTION_PREFIX.captures_iter(text) {
        let (Some(name), Some(next)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        // `FOO const& get()` is a type followed by a qualifier.
        if matches!(next.as_str(), "const" | "volatile") {
            continue;
        }
        spans.push((name.start(), name.end()));
    }
    for re in [&*RE_RECORD_PREFIX, &*RE_SPECIFIER_PREFIX] {
        spans.extend(
            re.captures_iter(text)
                .filter_map(|caps| caps.get(1))
                .map(|name| (name.start(), name.end())),
        );
    }

    if spans.is_empty() {
        return text.to_string();
    }
    debug!(count = spans.len(), "blanked export macros");

    let mut bytes = text.as_bytes().to_vec();
    for (start, end) in spans {
        bytes[start..end].fill(b' ');
    }
    // Only ASCII identifier bytes were replaced.
    String::from_utf8(bytes).unwrap_or_else(|_| text.to_string())
}

fn on_directive_line(text: &str, offset: usize) -> bool {
    let line_start = text[..offset].rfind('\n').map_or(0, |i| i + 1);
    text[line_start..offset].trim_start().starts_with('#')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_before_return_type_is_blanked() {
        let src = "struct OS\n{\n\tAPI_CPPR Owner<byte>\n\tvirtual_alloc(usize size);\n};\n";
        let out = neutralize(src, &[]);
        assert_eq!(out.len(), src.len());
        assert_eq!(out, src.replace("API_CPPR", "        "));
    }

    #[test]
    fn prefix_after_a_comment_on_the_same_line() {
        let src = "struct OS { /** @brief alloc */ API Owner<byte>\nvirtual_alloc(usize size); };";
        assert_eq!(neutralize(src, &[]), src.replace("API ", "    "));
    }

    #[test]
    fn template_arguments_and_qualifiers() {
        let src = "\tAPI_CPPR Result<File, OS_ERROR>\n\tfile_open(const char* name);\n";
        assert_eq!(neutralize(src, &[]), src.replace("API_CPPR", "        "));

        let src = "\tAPI_CPPR static void\n\treset();\n";
        assert_eq!(neutralize(src, &[]), src.replace("API_CPPR", "        "));
    }

    #[test]
    fn operators_and_macro_on_its_own_line() {
        let src = "\t\tAPI_CPPR File&\n\t\toperator=(File&& other);\n";
        assert_eq!(neutralize(src, &[]), src.replace("API_CPPR", "        "));

        let src = "\t\tAPI_CPPR\n\t\tvoid\n\t\tflush();\n";
        assert_eq!(neutralize(src, &[]), src.replace("API_CPPR", "        "));
    }

    #[test]
    fn specifiers_and_destructors() {
        let src = "\tAPI_CPPR extern OS *os;\n\tAPI_CPPR ~OS();\n";
        assert_eq!(neutralize(src, &[]), src.replace("API_CPPR", "        "));
    }

    #[test]
    fn upper_case_types_are_kept() {
        for src in [
            "BOOL ready();\n",
            "HANDLE handle;\n",
            "MY_TYPE const& get();\n",
            "template<typename T>\nT\nmax(T a, T b);\n",
            "DECLARE_THING(x)\n",
            "CONST_T* make();\n",
            "HANDLE\nopen();\n",
            "BOOL operator==(int other);\n",
        ] {
            assert_eq!(neutralize(src, &[]), src);
        }
    }

    #[test]
    fn empty_define_is_blanked_everywhere_but_the_directive() {
        let src = "#define API_CPPR\nstruct A\n{\n\tAPI_CPPR A(int x);\n\tAPI_CPPR ~A();\n};\n";
        assert_eq!(
            neutralize(src, &[]),
            "#define API_CPPR\nstruct A\n{\n\t         A(int x);\n\t         ~A();\n};\n"
        );
    }

    #[test]
    fn dllexport_define() {
        let src = "#define LIB_API __declspec(dllexport)\nLIB_API int f();\n";
        assert_eq!(
            neutralize(src, &[]),
            "#define LIB_API __declspec(dllexport)\n        int f();\n"
        );
    }

    #[test]
    fn configured_names() {
        let src = "EXPORT int f();\n";
        assert_eq!(neutralize(src, &["EXPORT".to_string()]), "       int f();\n");
    }

    #[test]
    fn record_prefix() {
        let src = "class API_CPPR Arena : public Base\n{\n};\n";
        assert_eq!(neutralize(src, &[]), src.replace("API_CPPR", "        "));
    }
}
