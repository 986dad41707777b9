use p10_proto::{tokenize, Command, Line, Message, Response, ServerNumeric};

#[test]
fn test_privmsg_tokenizing() {
    let tokens = tokenize("AB P #channel :Hello there");
    assert_eq!(tokens, vec!["AB", "P", "#channel", ":Hello", "there"]);

    let line = Line::parse("AB P #channel :Hello there").unwrap();
    assert_eq!(line.sender, Some("AB"));
    assert_eq!(line.command, Command::Privmsg);
    assert_eq!(line.args, vec!["#channel", ":Hello there"]);
}

#[test]
fn test_long_form_commands() {
    let line = Line::parse("ABAAC PRIVMSG JupeServ@jupe.example.net :auth admin hunter2").unwrap();
    assert_eq!(line.command, Command::Privmsg);
    assert_eq!(line.arg(0), Some("JupeServ@jupe.example.net"));
    assert_eq!(line.trailing(), Some("auth admin hunter2"));

    let line = Line::parse("ABAAC KILL AAAAA :AB!hub.example.net (bye)").unwrap();
    assert_eq!(line.command, Command::Kill);
    assert_eq!(line.arg(0), Some("AAAAA"));
}

#[test]
fn test_pong_from_ping() {
    let server = ServerNumeric::new(0).unwrap();
    let line = Line::parse("AB G AB :12345").unwrap();
    let pong = Message::new(server.to_string(), "Z").arg(line.last_param().unwrap());
    assert_eq!(format!("{}\r\n", pong), "AA Z 12345\r\n");
}

#[test]
fn test_info_reply_shape() {
    let line = Line::parse("ABAAC F AA").unwrap();
    let reply = Message::response("AA", Response::RPL_INFO, line.sender.unwrap()).trailing("jupe.example.net");
    assert_eq!(reply.to_string(), "AA 371 ABAAC :jupe.example.net");
}
