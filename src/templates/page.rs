//! Page component template
//!
//! The page name shows up three times in the output: as the component
//! identifier (`<Name>Page`), lower-cased in the CSS class
//! (`<name>-content`), and in a JSX comment.

/// Render the source of a page component
///
/// The name is interpolated verbatim; callers validate it first.
pub fn render_page(page_name: &str) -> String {
    let content = format!(
        r#"
import React from 'react';
import {{ SharedLayout }} from '../components/SharedLayout';

export const {name}Page: React.FC = () => {{
  return (
    <SharedLayout>
      <div className="{class}-content">
        {{/* {name}-specific content */}}
      </div>
    </SharedLayout>
  );
}};
"#,
        name = page_name,
        class = page_name.to_lowercase(),
    );

    content.trim().to_string()
}
