//! The fixed frontend-technology keyword list.
//!
//! Process-wide constant, loaded once at compile time, never mutated.
//! Entries are distinct, stored lowercase, and mixed English/Chinese;
//! the same list doubles as the topic-filter vocabulary.

/// Frontend-technology keywords scanned against every transcript.
pub const KEYWORDS: &[&str] = &[
    // Frameworks and libraries
    "react", "vue", "angular", "svelte", "solid", "preact", "jquery",
    // JavaScript and TypeScript
    "javascript", "typescript", "js", "ts", "ecmascript", "es6", "es2015",
    "es2016", "es2017", "es2018", "es2019", "es2020", "es2021", "es2022",
    // HTML
    "html", "html5", "semantic html", "markup", "dom", "document object model",
    // CSS
    "css", "css3", "sass", "scss", "less", "stylus", "postcss", "tailwind",
    "bootstrap", "material ui", "ant design", "chakra ui",
    // Build tooling and bundlers
    "webpack", "vite", "parcel", "rollup", "esbuild", "babel", "swc",
    "turbopack", "browserify",
    // State management
    "redux", "vuex", "pinia", "mobx", "recoil", "zustand", "jotai", "xstate",
    // Routing
    "react router", "vue router", "angular router", "next router",
    "reach router",
    // Testing
    "jest", "testing library", "cypress", "playwright", "enzyme", "vitest",
    "storybook", "msw",
    // Meta-frameworks and SSR/SSG
    "next.js", "nuxt", "gatsby", "remix", "astro", "sveltekit", "vuepress",
    "gridsome",
    // Code quality tooling
    "eslint", "prettier", "stylelint", "husky", "lint-staged", "commitlint",
    // Performance
    "lighthouse", "web vitals", "performance", "lazy loading",
    "code splitting",
    // Security
    "csp", "content security policy", "xss", "cross site scripting", "csrf",
    "cross site request forgery",
    // Browser and Web APIs
    "fetch", "websocket", "service worker", "web worker", "indexeddb",
    "localstorage", "sessionstorage",
    // Networking
    "http", "https", "rest", "graphql", "api", "ajax", "xhr",
    // Mobile and responsive
    "responsive", "mobile first", "pwa", "progressive web app", "media query",
    // Web Components
    "web components", "custom elements", "shadow dom", "lit element",
    "stencil",
    // Common utility libraries
    "lodash", "axios", "moment", "dayjs", "date-fns", "i18n",
    "internationalization",
    // Design and UX
    "ux", "user experience", "ui", "user interface", "accessibility", "a11y",
    // Chinese frontend terms
    "前端", "前端开发", "网页", "浏览器", "响应式", "移动端", "桌面端",
    "跨平台", "前端框架", "组件", "状态管理", "路由", "构建工具", "打包",
    // Chinese ecosystem terms
    "脚手架", "微前端", "小程序", "公众号", "单页应用", "多页应用",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn entries_are_distinct() {
        let unique: HashSet<&str> = KEYWORDS.iter().copied().collect();
        assert_eq!(unique.len(), KEYWORDS.len());
    }

    #[test]
    fn entries_are_stored_lowercase() {
        // detect() lowercases the transcript only; the scan relies on the
        // list itself already being lowercase.
        for k in KEYWORDS {
            assert_eq!(*k, k.to_lowercase(), "keyword not lowercase: {k}");
        }
    }

    #[test]
    fn entries_are_nonempty() {
        assert!(KEYWORDS.iter().all(|k| !k.is_empty()));
    }

    #[test]
    fn list_is_large_enough_for_gradual_scoring() {
        // The /5 amplification in the score formula assumes a list of
        // roughly 150 entries so saturation needs ~30 matches.
        assert!(KEYWORDS.len() >= 140, "list shrank to {}", KEYWORDS.len());
    }
}
