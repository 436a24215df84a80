use typeset_html::{HtmlOptions, TypesetError, TypesetOptions, typeset_html};

fn typeset(html: &str) -> String {
    typeset_html(html, &HtmlOptions::default()).expect("rewrite should succeed")
}

#[test]
fn verbatim_containers_are_byte_identical() {
    let verbatim = concat!(
        "<pre>\"a\" -- b... 'c'</pre>",
        "<code>1880-1912 &quot;q&quot;</code>",
        "<script>var s = \"x\" -- 1;</script>",
        "<style>a::after { content: \"--\"; }</style>",
    );
    assert_eq!(typeset(verbatim), verbatim);
}

#[test]
fn nested_markup_inside_ignored_elements_is_skipped() {
    insta::assert_snapshot!(
        typeset("<pre><code>\"x\"</code> <b>'y'</b></pre><p>'Twas</p>"),
        @"<pre><code>\"x\"</code> <b>'y'</b></pre><p>’Twas</p>"
    );
}

#[test]
fn tag_names_match_case_insensitively() {
    let input = "<CODE>\"x\" -- y</CODE>";
    assert_eq!(typeset(input), input);
}

#[test]
fn entities_outside_the_rules_survive() {
    insta::assert_snapshot!(
        typeset("<p>Tom &amp; Jerry&#39;s &quot;show&quot;</p>"),
        @"<p>Tom &amp; Jerry’s “show”</p>"
    );
}

#[test]
fn attributes_are_not_rewritten() {
    insta::assert_snapshot!(
        typeset(r##"<a title="&quot;x&quot; -- y" href="#">"x"</a>"##),
        @r##"<a title="&quot;x&quot; -- y" href="#">“x”</a>"##
    );
}

#[test]
fn every_stage_runs_on_text() {
    assert_eq!(
        typeset("<p>\"a\" -- b...</p>"),
        "<p>“a”\u{200A}—\u{200A}b…</p>"
    );
    assert_eq!(
        typeset("<li>1880 &ndash; 1912</li>"),
        "<li>1880\u{200A}–\u{200A}1912</li>"
    );
}

#[test]
fn custom_ignored_elements_replace_the_defaults() {
    let options = HtmlOptions {
        ignored_elements: vec!["kbd".to_string()],
        ..HtmlOptions::default()
    };
    let out = typeset_html("<kbd>--</kbd><code>--</code>", &options).unwrap();
    assert_eq!(out, "<kbd>--</kbd><code>—</code>");
}

#[test]
fn disabled_stages_leave_text_alone() {
    let options = HtmlOptions::from(TypesetOptions::disabled());
    let input = "<p>\"a\" -- b...</p>";
    assert_eq!(typeset_html(input, &options).unwrap(), input);
}

#[test]
fn options_parse_from_json() {
    let options = HtmlOptions::from_json(r#"{"spaces": false}"#).unwrap();
    assert_eq!(
        typeset_html("<p>4 × 4</p>", &options).unwrap(),
        "<p>4 × 4</p>"
    );

    let err = HtmlOptions::from_json(r#"{"quotes": 3}"#).unwrap_err();
    assert!(matches!(err, TypesetError::InvalidOptions(_)));
}

#[test]
fn long_text_nodes_are_typeset_whole() {
    let sentence = "\"It's\" -- she said... ";
    let input = format!("<p>{}</p>", sentence.repeat(2_000));
    let out = typeset(&input);
    assert!(!out.contains('"'));
    assert!(!out.contains("--"));
    assert!(!out.contains("..."));
    assert_eq!(out.matches('“').count(), 2_000);
}

#[test]
fn comments_and_doctype_pass_through() {
    let input = "<!DOCTYPE html><!-- \"keep\" -- me --><p>ok</p>";
    assert_eq!(typeset(input), input);
}

#[test]
fn encoded_quotes_and_dashes_are_typeset() {
    assert_eq!(typeset("<p>it&#x27;s &#34;fine&#34;</p>"), "<p>it’s “fine”</p>");
    assert_eq!(typeset("<p>&apos;Twas</p>"), "<p>’Twas</p>");
    assert_eq!(
        typeset("<p>1880&#8212;1912</p>"),
        "<p>1880\u{200A}–\u{200A}1912</p>"
    );
}
