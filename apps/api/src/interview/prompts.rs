// Prompt templates for interview question generation.
// Placeholders: {technical_stack}, {cv_context}, {jd_context}.

/// Number of questions every prompt asks for and every response is padded to.
pub const QUESTION_COUNT: usize = 5;

pub const TECHNICAL_PROMPT_TEMPLATE: &str = r#"You are an experienced technical interviewer. Generate 5 technical interview questions based on the following context:

Technical Skills Required: {technical_stack}
Candidate Background: {cv_context}
Job Requirements: {jd_context}

Rules for generating questions:
1. Questions should test practical coding and problem-solving skills
2. Include questions about system design and architecture
3. Focus on the specific technical stack mentioned
4. Match the complexity to the candidate's experience level
5. Each question should be clear and specific

Please generate exactly 5 questions, formatted as a numbered list (1-5).
Just provide the questions without any additional text or explanations."#;

pub const BEHAVIORAL_PROMPT_TEMPLATE: &str = r#"You are an experienced HR interviewer. Generate 5 behavioral interview questions based on the following context:

Candidate Background: {cv_context}
Job Requirements: {jd_context}

Rules for generating questions:
1. Questions should follow the STAR format
2. Focus on past experiences and specific situations
3. Include questions about teamwork and leadership
4. Cover conflict resolution and problem-solving
5. Make questions relevant to the candidate's experience level

Please generate exactly 5 questions, formatted as a numbered list (1-5).
Just provide the questions without any additional text or explanations."#;

pub const COMPETENCY_PROMPT_TEMPLATE: &str = r#"You are an experienced competency-based interviewer. Generate 5 competency-based questions using the following context:

Candidate Background: {cv_context}
Job Requirements: {jd_context}

Rules for generating questions:
1. Focus on specific skills and competencies required for the role
2. Include questions about project management and delivery
3. Cover communication and stakeholder management
4. Address decision-making and problem-solving abilities
5. Make questions measurable and evidence-based

Please generate exactly 5 questions, formatted as a numbered list (1-5).
Just provide the questions without any additional text or explanations."#;

pub const GENERAL_PROMPT_TEMPLATE: &str = r#"You are an experienced hiring manager. Generate 5 general interview questions using the following context:

Candidate Background: {cv_context}
Job Requirements: {jd_context}

Rules for generating questions:
1. Cover motivation for the role and the company
2. Ask about career goals and how the role fits them
3. Explore the candidate's strengths and areas for growth
4. Include one question about the candidate's most relevant achievement
5. Keep questions open-ended

Please generate exactly 5 questions, formatted as a numbered list (1-5).
Just provide the questions without any additional text or explanations."#;
