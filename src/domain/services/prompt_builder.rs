// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::company::CompanyProfile;
use crate::domain::models::journalist::Journalist;

/// System message for the journalist discovery call.
pub const RESEARCHER_SYSTEM_PROMPT: &str = "You are a meticulous media researcher who only responds with valid JSON and never includes commentary outside of the JSON object.";

/// System message for the outreach drafting call.
pub const COPYWRITER_SYSTEM_PROMPT: &str =
    "You are a concise PR copywriter who only responds with valid JSON matching the requested schema.";

pub const DISCOVERY_TEMPERATURE: f32 = 0.3;
pub const OUTREACH_TEMPERATURE: f32 = 0.4;

/// Render the journalist discovery instruction.
///
/// Pure string templating: identical inputs produce byte-identical
/// output.
pub fn build_discovery_prompt(company: &CompanyProfile, target_count: u32) -> String {
    format!(
        r#"You are an expert at finding PR leads for tech startups. You are provided with a customer company name, a company description, and a website URL which needs media outreach. If you have the URL, go to the front page and analyze what they do. They need to be covered by premier journalists in prominent media such as WSJ, Forbes, New York Times, TechCrunch, BusinessInsider, Washington Post, Bloomberg, The Verge etc. Do not limit yourself to the outlets above, and suggest the most fitting outlet based on their website or content. Find {target_count} different journalists who have covered a product like the one specified in the URL. If the URL is not descriptive enough, use the company description text instead. Search for each journalist's email, LinkedIn profile, and X handle.

While doing the search, indicate your sources and the relevance score.

Return the data as JSON with a top-level "journalists" array of exactly {target_count} entries. Each entry MUST match the following schema and use null when data is unavailable:
{{
  "name": string,
  "outlet": string,
  "beat": string,
  "articleLink": string (absolute URL),
  "email": string | null,
  "linkedin": string | null,
  "xHandle": string | null,
  "relevanceScore": number (1-100),
  "sources": [
    {{ "title": string, "url": string (absolute URL) }}
  ]
}}

Customer company name: {name}
Company description: {description}
URL: {website}

Ensure that: (1) at least one source with a working link is provided per journalist, (2) relevanceScore is a whole number between 1 and 100, and (3) the beat summary references the linked article. Do not include any extra commentary outside of the JSON."#,
        target_count = target_count,
        name = company.name,
        description = company.description,
        website = company.website,
    )
}

/// Render the outreach drafting instruction for one journalist.
pub fn build_outreach_prompt(journalist: &Journalist, company: &CompanyProfile) -> String {
    let handle_summary = [
        journalist
            .x_handle
            .as_deref()
            .map(|h| format!("X handle: {h}")),
        journalist
            .linkedin
            .as_deref()
            .map(|l| format!("LinkedIn profile: {l}")),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join("\n");

    let source_summary = journalist
        .sources
        .iter()
        .enumerate()
        .map(|(index, source)| {
            let title = source.title.as_deref().unwrap_or("Source");
            format!("{}. {} ({})", index + 1, title, source.url)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let mut context = format!(
        "- Recent coverage summary: {}\n- Article link: {}",
        journalist.beat.as_deref().unwrap_or("Not available"),
        journalist.article_link.as_deref().unwrap_or("Not available"),
    );
    if !handle_summary.is_empty() {
        context.push_str(&format!("\n- Handles:\n{handle_summary}"));
    }
    if !source_summary.is_empty() {
        context.push_str(&format!("\n- Additional sources:\n{source_summary}"));
    }

    format!(
        r#"Draft a personalised outreach plan for journalist {journalist_name} at {outlet}. The startup is {company_name} ({website}) with this description: {description}.

Important context about the journalist:
{context}

Your objectives:
- Analyze the founder's experience and their product, then craft unique coverage angles tailored for this journalist.
- Be personalised in the messaging, be extremely concise, and hook the journalist with the first sentence.
- Demonstrate you have read a previous article they covered with similar or related topics.
- Pitch an angle to cover the story.
- Pitch the story by offering an exclusive interview or exclusive angle to be reported.
- Tailor one message per channel: email cold reach, X direct message, X public post (mention their handle directly), LinkedIn direct message, LinkedIn public post (mention their handle directly).
- Do not use any em dashes or arrows in the responses.

Return the result as JSON with this exact shape:
{{
  "email": string,
  "xDirectMessage": string,
  "xPublicPost": string,
  "linkedInDirectMessage": string,
  "linkedInPublicPost": string
}}

Ensure each value is a single concise message for the specified channel, ready to send."#,
        journalist_name = journalist.name,
        outlet = journalist.outlet,
        company_name = company.name,
        website = company.website,
        description = company.description,
        context = context,
    )
}
