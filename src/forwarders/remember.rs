//! `remember` forwarder.

use crate::memory::MemoryStore;
use crate::placeholder::Resolver;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RememberArgs {
    pub namespace: String,
    pub text: String,
}

/// Resolve both fields, then store the text under the namespace.
///
/// Both fields are resolved against the store as it was before the write.
/// Returns the resolved namespace.
pub fn remember(memory: &MemoryStore, resolver: &Resolver<'_>, args: RememberArgs) -> String {
    let namespace = resolver.resolve(&args.namespace);
    let text = resolver.resolve(&args.text);
    tracing::debug!(namespace = %namespace, bytes = text.len(), "remember");
    memory.remember(namespace.clone(), text);
    namespace
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{editor_at, test_environment};

    fn args(namespace: &str, text: &str) -> RememberArgs {
        RememberArgs {
            namespace: namespace.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_remember_resolves_both_fields() {
        let memory = MemoryStore::new();
        let env = test_environment();
        let editor = editor_at("/src/lib.rs", "pub fn build() {}", 0, 9);
        let resolver = Resolver::new(&env, Some(&editor), &memory);

        let namespace = remember(&memory, &resolver, args("last-{fileExtnameNoLeadingDot}", "{word}"));

        assert_eq!(namespace, "last-rs");
        assert_eq!(memory.lookup("last-rs"), "build");
    }

    #[test]
    fn test_remember_overwrites() {
        let memory = MemoryStore::new();
        let env = test_environment();
        let resolver = Resolver::new(&env, None, &memory);

        remember(&memory, &resolver, args("ns", "v1"));
        remember(&memory, &resolver, args("ns", "v2"));

        assert_eq!(resolver.resolve("{memory:ns}"), "v2");
    }

    #[test]
    fn test_remember_can_read_previous_value() {
        let memory = MemoryStore::new();
        memory.remember("count", "1");
        let env = test_environment();
        let resolver = Resolver::new(&env, None, &memory);

        remember(&memory, &resolver, args("count", "{memory:count}+1"));

        assert_eq!(memory.lookup("count"), "1+1");
    }
}
