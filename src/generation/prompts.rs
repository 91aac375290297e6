pub const REFINE_PROMPT: &str = "Fix spelling and grammar errors in the user's text. Reword unclear sentences to be clearer.
Do not add any new information, ideas, or structure.
Do not make it more professional or formal.
Just fix what the user wrote and make it readable.";

pub const NEWSLETTER_PROMPT: &str = "You are a professional newsletter writer for a project management team.
Your task is to create a comprehensive monthly project status newsletter.

Format the newsletter with:
1. **Executive Summary**: Brief overview of all active projects and key highlights
2. **Project Updates**: For each project, provide:
   - Project name and type
   - Current status
   - Key accomplishments and progress from the last month
   - Notable updates or blockers
3. **Key Highlights**: Bullet points of major achievements across all projects
4. **Next Steps**: High-level action items and focus areas

Use a professional, informative tone. Keep it concise but comprehensive.
Format using clear headings, bullet points, and paragraphs for readability.
Make sure the content is suitable for executive-level stakeholders.";

pub fn newsletter_input(report: &str) -> String {
    format!("Generate a monthly project status newsletter based on the following data:\n\n{report}")
}
