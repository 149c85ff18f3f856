use anyhow::Result;
use log::debug;

use crate::commands::display_name;
use crate::package::{StoreLayout, selector};
use crate::runtime::Runtime;

/// List installed packages matching a name or glob, grouped per store
/// root. No name lists everything; a plain name searches as a substring.
#[tracing::instrument(skip(runtime, layout))]
pub fn list<R: Runtime>(runtime: &R, name: Option<&str>, layout: &StoreLayout) -> Result<()> {
    let pattern = selector::normalize_list_pattern(name);
    debug!("listing store entries matching '{}'", pattern);

    println!("Search String = '{}'", pattern);
    println!();

    for root in layout.roots() {
        println!("{}:", root.display());
        let matched = selector::matches_in_root(runtime, root, &pattern);
        if matched.is_empty() {
            println!("  <no files>");
        }
        for path in &matched {
            println!("  {}", display_name(path));
        }
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::StoreLayout;
    use crate::runtime::MockRuntime;
    use crate::test_utils::test_home;
    use mockall::predicate::eq;

    #[test]
    fn test_list_empty_store() {
        let mut runtime = MockRuntime::new();
        // Neither root exists yet.
        runtime.expect_is_dir().returning(|_| false);

        let layout = StoreLayout::under_home(&test_home());
        list(&runtime, None, &layout).unwrap();
    }

    #[test]
    fn test_list_consults_both_roots() {
        let mut runtime = MockRuntime::new();
        let layout = StoreLayout::under_home(&test_home());
        let debuginfo = layout.debuginfo_root.clone();
        let srpm = layout.srpm_root.clone();

        let entry = debuginfo.join("httpd-debuginfo-1.0");
        let entry2 = entry.clone();
        runtime
            .expect_is_dir()
            .with(eq(debuginfo.clone()))
            .returning(|_| true);
        runtime
            .expect_read_dir()
            .with(eq(debuginfo.clone()))
            .times(1)
            .returning(move |_| Ok(vec![entry2.clone()]));
        runtime.expect_is_dir().with(eq(entry)).returning(|_| true);

        runtime
            .expect_is_dir()
            .with(eq(srpm.clone()))
            .returning(|_| true);
        runtime
            .expect_read_dir()
            .with(eq(srpm.clone()))
            .times(1)
            .returning(|_| Ok(vec![]));

        list(&runtime, Some("httpd"), &layout).unwrap();
    }
}
