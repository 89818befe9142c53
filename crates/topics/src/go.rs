//! Built-in Go tag dictionary.
//!
//! Each row lists every alias that should land in a topic. `order` is unique
//! within a difficulty tier and fixes the on-page sequence of sections.

use crate::dictionary::{TopicDictionary, TopicInfo};
use catalog::Difficulty::{self, Easy, Hard, Medium};

struct TopicRow {
    tags: &'static [&'static str],
    name: &'static str,
    category: &'static str,
    difficulty: Difficulty,
    order: u32,
}

const fn topic(
    tags: &'static [&'static str],
    name: &'static str,
    category: &'static str,
    difficulty: Difficulty,
    order: u32,
) -> TopicRow {
    TopicRow {
        tags,
        name,
        category,
        difficulty,
        order,
    }
}

const GO_TOPICS: &[TopicRow] = &[
    // Easy
    topic(
        &["basics", "go-basics", "syntax", "fundamentals", "introduction", "hello-world", "go", "golang"],
        "Go Basics", "Basics", Easy, 1,
    ),
    topic(
        &["variables", "var", "constants", "const", "iota", "short-declaration", "zero-values", "zero-value", "declarations"],
        "Variables & Constants", "Basics", Easy, 2,
    ),
    topic(
        &["basic-types", "types", "int", "float", "bool", "rune", "runes", "byte", "type-conversion", "type-conversions"],
        "Basic Types", "Types", Easy, 3,
    ),
    topic(
        &["strings", "string", "string-builder", "strings-package", "utf-8", "unicode"],
        "Strings", "Types", Easy, 4,
    ),
    topic(
        &["control-flow", "if", "for", "loops", "loop", "switch", "range", "for-range", "goto", "labels"],
        "Control Flow", "Control Flow", Easy, 5,
    ),
    topic(
        &["functions", "function", "func", "variadic", "variadic-functions", "multiple-return-values", "named-returns", "return-values"],
        "Functions", "Functions", Easy, 6,
    ),
    topic(&["arrays", "array"], "Arrays", "Collections", Easy, 7),
    topic(
        &["slices", "slice", "append", "slice-capacity", "copy", "make"],
        "Slices", "Collections", Easy, 8,
    ),
    topic(&["maps", "map", "hashmap", "map-iteration"], "Maps", "Collections", Easy, 9),
    topic(
        &["structs", "struct", "struct-tags", "anonymous-structs", "embedding", "struct-embedding", "composition"],
        "Structs", "Structs & Interfaces", Easy, 10,
    ),
    topic(
        &["pointers", "pointer", "new", "address-of", "dereference"],
        "Pointers", "Pointers & Memory", Easy, 11,
    ),
    topic(
        &["packages", "package", "imports", "import", "exported-names", "visibility", "init", "init-function"],
        "Packages", "Packages & Modules", Easy, 12,
    ),
    topic(
        &["errors", "error", "error-handling", "errors-new", "fmt-errorf"],
        "Error Basics", "Error Handling", Easy, 13,
    ),
    topic(&["fmt", "printing", "printf", "stringer"], "Formatting", "Standard Library", Easy, 14),
    // Medium
    topic(
        &["methods", "method", "receivers", "pointer-receivers", "value-receivers", "method-sets"],
        "Methods", "Structs & Interfaces", Medium, 1,
    ),
    topic(
        &["interfaces", "interface", "empty-interface", "any", "type-assertion", "type-assertions", "type-switch", "duck-typing", "implicit-interfaces"],
        "Interfaces", "Structs & Interfaces", Medium, 2,
    ),
    topic(
        &["closures", "closure", "anonymous-functions", "first-class-functions", "higher-order-functions"],
        "Closures", "Functions", Medium, 3,
    ),
    topic(
        &["defer", "panic", "recover", "panic-recover"],
        "Defer, Panic & Recover", "Error Handling", Medium, 4,
    ),
    topic(
        &["error-wrapping", "errors-is", "errors-as", "wrapping", "custom-errors", "sentinel-errors"],
        "Error Wrapping", "Error Handling", Medium, 5,
    ),
    topic(
        &["goroutines", "goroutine", "go-routines", "go-statement", "concurrency", "concurrent"],
        "Goroutines", "Concurrency", Medium, 6,
    ),
    topic(
        &["channels", "channel", "buffered-channels", "unbuffered-channels", "channel-direction", "close-channel"],
        "Channels", "Concurrency", Medium, 7,
    ),
    topic(
        &["select", "select-statement", "timeouts", "time-after", "non-blocking"],
        "Select", "Concurrency", Medium, 8,
    ),
    topic(
        &["sync", "mutex", "rwmutex", "waitgroup", "sync-waitgroup", "once", "sync-once", "sync-mutex", "locks"],
        "Sync Primitives", "Concurrency", Medium, 9,
    ),
    topic(
        &["context", "context-cancellation", "cancellation", "deadlines", "context-timeout"],
        "Context", "Concurrency", Medium, 10,
    ),
    topic(
        &["modules", "go-mod", "go-modules", "dependency-management", "go-sum", "vendoring"],
        "Modules", "Packages & Modules", Medium, 11,
    ),
    topic(
        &["testing", "unit-testing", "tests", "test", "table-driven-tests", "go-test", "mocks", "mocking", "testify"],
        "Testing", "Testing", Medium, 12,
    ),
    topic(
        &["json", "encoding", "encoding-json", "marshal", "unmarshal", "serialization", "xml"],
        "Encoding", "Standard Library", Medium, 13,
    ),
    topic(
        &["io", "io-reader", "io-writer", "files", "file-io", "bufio", "os"],
        "I/O", "Standard Library", Medium, 14,
    ),
    topic(&["time", "time-package", "timers", "tickers", "ticker"], "Time", "Standard Library", Medium, 15),
    topic(
        &["http", "net-http", "http-server", "http-client", "handlers", "middleware", "rest", "rest-api", "routing"],
        "HTTP", "Web & Networking", Medium, 16,
    ),
    topic(
        &["database", "sql", "database-sql", "gorm", "orm", "transactions"],
        "Databases", "Web & Networking", Medium, 17,
    ),
    topic(
        &["generics", "generic", "type-parameters", "constraints", "type-constraints", "comparable"],
        "Generics", "Generics", Medium, 18,
    ),
    topic(
        &["tooling", "go-vet", "gofmt", "go-build", "go-tools", "linting", "golangci-lint", "go-generate"],
        "Tooling", "Tooling", Medium, 19,
    ),
    // Hard
    topic(
        &["concurrency-patterns", "worker-pool", "worker-pools", "pipeline", "pipelines", "fan-in", "fan-out", "fan-in-fan-out", "semaphore", "rate-limiting", "errgroup"],
        "Concurrency Patterns", "Concurrency", Hard, 1,
    ),
    topic(
        &["race-conditions", "race-condition", "data-race", "data-races", "race-detector", "deadlock", "deadlocks", "atomic", "sync-atomic"],
        "Race Conditions", "Concurrency", Hard, 2,
    ),
    topic(&["memory-model", "happens-before", "memory-ordering"], "Memory Model", "Concurrency", Hard, 3),
    topic(
        &["channel-internals", "hchan", "channel-implementation"],
        "Channel Internals", "Concurrency", Hard, 4,
    ),
    topic(
        &["scheduler", "goroutine-scheduler", "gmp", "runtime-scheduler", "gomaxprocs", "preemption"],
        "Scheduler", "Runtime", Hard, 5,
    ),
    topic(
        &["garbage-collection", "gc", "garbage-collector", "memory-management", "escape-analysis", "heap", "stack", "allocation", "allocations"],
        "Garbage Collection", "Runtime", Hard, 6,
    ),
    topic(
        &["slice-internals", "slice-header", "underlying-array", "map-internals", "hash-map-internals"],
        "Collection Internals", "Collections", Hard, 7,
    ),
    topic(
        &["interface-internals", "itab", "nil-interface", "interface-nil", "method-dispatch"],
        "Interface Internals", "Structs & Interfaces", Hard, 8,
    ),
    topic(&["reflection", "reflect", "runtime-type-information"], "Reflection", "Runtime", Hard, 9),
    topic(&["unsafe", "unsafe-pointer", "cgo", "ffi"], "Unsafe & Cgo", "Runtime", Hard, 10),
    topic(
        &["profiling", "pprof", "benchmarks", "benchmarking", "benchmark", "tracing", "trace"],
        "Profiling", "Performance", Hard, 11,
    ),
    topic(
        &["performance", "optimization", "sync-pool", "memory-optimization", "zero-allocation", "inlining"],
        "Optimization", "Performance", Hard, 12,
    ),
    topic(
        &["design-patterns", "patterns", "dependency-injection", "functional-options", "options-pattern", "singleton", "factory", "clean-architecture", "solid"],
        "Design Patterns", "Design", Hard, 13,
    ),
    topic(
        &["networking", "net", "tcp", "udp", "websockets", "sockets"],
        "Networking", "Web & Networking", Hard, 14,
    ),
    topic(
        &["microservices", "grpc", "protobuf", "distributed-systems", "service-discovery"],
        "Microservices", "Web & Networking", Hard, 15,
    ),
];

/// Build the Go dictionary.
pub fn go_dictionary() -> TopicDictionary {
    let mut dictionary = TopicDictionary::new();
    for row in GO_TOPICS {
        let info = TopicInfo::new(row.name, row.category, row.difficulty, row.order);
        for tag in row.tags {
            dictionary.insert(tag, info.clone());
        }
    }
    dictionary
}
