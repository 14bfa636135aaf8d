/// A named pattern benchmarked against the fixture corpus.
#[derive(Debug, Clone, Copy)]
pub struct BenchCase {
    pub name: &'static str,
    pub pattern: &'static str,
}

/// The cases executed by the driver, in order.
pub const CASES: &[BenchCase] = &[
    BenchCase {
        name: "Anchor",
        pattern: r"^## ",
    },
    BenchCase {
        name: "Email",
        pattern: r"[\w\.+-]+@[\w\.-]+\.[\w\.-]+",
    },
    // BenchCase {
    //     name: "URI - lookahead",
    //     pattern: r"[\w]+:\/\/[^\/\s?#]+[^\s?#]+(?:\?[^\s#]*)?(?:#[^\s]*)?",
    // },
    BenchCase {
        name: "URI - word boundary",
        pattern: r"https?://(www\.)?[-a-zA-Z0-9@:%._\+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_\+.~#?&//=]*)",
    },
    // BenchCase {
    //     name: "IP - lookahead",
    //     pattern: r"(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9])\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9])",
    // },
    BenchCase {
        name: "IP - word boundary",
        pattern: r"\b(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])\.(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])\.(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])\.(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])\b",
    },
];
