//! Defines constants used throughout the SVG conversion process.

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Id of the single page group.
pub const PAGE_GROUP_ID: &str = "p1";

/// Decimal places for polyline coordinates and stroke widths.
pub const COORD_PRECISION: usize = 3;

/// Page-flip script kept in every document so multi-page viewers can toggle
/// page groups by id.
pub const PAGE_SCRIPT: &str = r#"    <script type="application/ecmascript"> <![CDATA[
        var visiblePage = 'p1';
        function goToPage(page) {
            document.getElementById(visiblePage).setAttribute('style', 'display: none');
            document.getElementById(page).setAttribute('style', 'display: inline');
            visiblePage = page;
        }
    ]]>
    </script>
"#;
