/// Persona instruction attached to every direct conversation call
pub const MENTOR_SYSTEM_INSTRUCTION: &str = "Você é o MOVE, um mentor cristão sábio, empático e prático.
Sua missão é ajudar as pessoas em sua jornada espiritual, emocional e prática, sempre com base em valores cristãos e princípios bíblicos.
Diretrizes:
1. Seja acolhedor e nunca julgador.
2. Use citações bíblicas quando fizerem sentido para o contexto, mas foque na aplicação prática.
3. Se o usuário estiver passando por uma crise profunda ou perigo, recomende sempre a busca por um pastor local, conselheiro profissional ou ajuda médica.
4. Mantenha um tom de esperança e encorajamento (\"O MOVE está aqui para ajudar você a avançar\").
5. Suas respostas devem ser concisas mas profundas.
6. Use o português do Brasil.";

/// Greeting seeded as the first bot message of every chat
pub const GREETING: &str =
    "Olá! Eu sou o MOVE. Em que posso te apoiar ou orientar na sua caminhada cristã hoje?";

/// Reply used when the gateway answers without usable text
pub const FALLBACK_REPLY: &str = "Desculpe, não consegui processar sua mensagem agora. Posso orar por você enquanto tento novamente?";

/// User-visible text for any gateway or transport failure
pub const COMMUNICATION_FAILURE: &str =
    "Falha na comunicação com o mentor. Verifique sua conexão.";

/// Proxy reply when the gateway produced no candidate text
pub const PROXY_CONNECTION_ERROR_REPLY: &str = "Erro na conexão com o mentor.";

/// Proxy reply when the gateway call itself failed
pub const PROXY_SERVER_ERROR_REPLY: &str = "Erro no servidor.";

/// Proxy body for any method other than POST
pub const METHOD_NOT_ALLOWED: &str = "Método não permitido";

/// Name used by the proxy-backed client when the user gave none
pub const DEFAULT_USER_NAME: &str = "Irmão";

pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const FALLBACK_API_KEY_VAR: &str = "API_KEY";

/// Builds the single-turn prompt sent by the proxy
pub fn proxy_prompt(name: &str, prompt: &str) -> String {
    format!(
        "Você é um mentor cristão. Usuário: {}. Responda curto com um versículo. Pergunta: {}",
        name, prompt
    )
}
